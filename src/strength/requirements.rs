//! Base requirement table - the fixed checks every password is scored against.
//!
//! Each requirement binds a stable id and a display label to a predicate.
//! The table is immutable; per-password results are recomputed on every
//! evaluation and never written back onto the table.

const MIN_LENGTH: usize = 8;

/// A named boolean predicate a password is checked against.
pub struct Requirement {
    /// Stable identifier, usable as a widget element key.
    pub id: &'static str,
    /// Display label, doubles as the feedback line when unmet.
    pub label: &'static str,
    check: fn(&str) -> bool,
}

impl Requirement {
    /// Runs this requirement's predicate against a password.
    #[must_use]
    pub fn is_met(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

/// The fixed requirement table, in declaration (and feedback) order.
pub static REQUIREMENTS: [Requirement; 5] = [
    Requirement {
        id: "min-length",
        label: "At least 8 characters",
        check: has_min_length,
    },
    Requirement {
        id: "uppercase",
        label: "An uppercase letter",
        check: has_uppercase,
    },
    Requirement {
        id: "lowercase",
        label: "A lowercase letter",
        check: has_lowercase,
    },
    Requirement {
        id: "digit",
        label: "A number",
        check: has_digit,
    },
    Requirement {
        id: "special",
        label: "A special character",
        check: has_special,
    },
];

fn has_min_length(password: &str) -> bool {
    password.len() >= MIN_LENGTH
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_uppercase())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_lowercase())
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_special(password: &str) -> bool {
    password.chars().any(|c| !c.is_alphanumeric())
}
