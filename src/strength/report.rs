//! Strength report types - the result of a password evaluation.

/// Coarse strength bucket derived from the percentage score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Classifies an (unrounded) percentage into a strength level.
    ///
    /// Thresholds: `<30` weak, `<60` fair, `<80` good, otherwise strong.
    #[must_use]
    pub fn from_percentage(percentage: f32) -> Self {
        if percentage < 30.0 {
            Self::Weak
        } else if percentage < 60.0 {
            Self::Fair
        } else if percentage < 80.0 {
            Self::Good
        } else {
            Self::Strong
        }
    }

    /// Returns the display color for this level.
    ///
    /// The mapping is fixed and one-to-one; this is the only place the
    /// colors are defined.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Weak => "#e74c3c",
            Self::Fair => "#f39c12",
            Self::Good => "#3498db",
            Self::Strong => "#2ecc71",
        }
    }

    /// Lowercase label for display and logging.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Strong => "strong",
        }
    }
}

/// Result of evaluating a single candidate password.
///
/// Recomputed from scratch on every call; nothing is cached between
/// evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Total score rounded to the nearest integer, `0..=7`.
    pub score: u8,
    /// Strength bucket, classified before rounding.
    pub level: StrengthLevel,
    /// Percentage of the maximum score, rounded, `0..=100`.
    pub percentage: u8,
    /// Unmet requirement labels in declaration order, or a single
    /// all-requirements-met message.
    pub feedback: Vec<String>,
}

impl StrengthReport {
    /// Display color for the report's level.
    #[must_use]
    pub fn color(&self) -> &'static str {
        self.level.color()
    }
}
