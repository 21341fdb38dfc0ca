//! Zoom and pan state management for an image viewer.
//!
//! Holds the current zoom scale and pan offset, converts wheel and drag
//! input into clamped scale and translated position, and derives the
//! transform parameters the host hands to its renderer. Clamping
//! replaces error signaling throughout; every transition is total.

use thiserror::Error;

/// Lower scale bound.
pub const MIN_SCALE: f32 = 0.5;
/// Upper scale bound.
pub const MAX_SCALE: f32 = 5.0;
/// Wheel-up multiplier.
pub const WHEEL_IN: f32 = 1.1;
/// Wheel-down multiplier.
pub const WHEEL_OUT: f32 = 0.9;
/// Button zoom-in multiplier.
pub const STEP_IN: f32 = 1.2;
/// Button zoom-out multiplier.
pub const STEP_OUT: f32 = 0.8;

const RESET_SCALE: f32 = 1.0;

#[derive(Error, Debug, PartialEq)]
pub enum ZoomError {
    #[error("invalid zoom bounds: min {min} must be positive, finite, and not exceed max {max}")]
    InvalidBounds { min: f32, max: f32 },
    #[error("zoom bounds [{min}, {max}] must include the reset scale 1.0")]
    ResetScaleOutOfBounds { min: f32, max: f32 },
}

/// A point in viewer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Render transform parameters: translate first, then scale.
///
/// The translation is the pan offset pre-divided by the current scale,
/// which keeps the visual pan speed constant regardless of zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale_factor: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

/// Zoom and pan state for a single viewer instance.
///
/// Scale stays clamped to the configured bounds. The offset is
/// unbounded (panning past the image edges is allowed) but resets to
/// the origin when a `zoom_out` brings the scale back down to 1.0 or
/// below.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomPan {
    scale: f32,
    offset: Point,
    pan_anchor: Option<Point>,
    min_scale: f32,
    max_scale: f32,
}

impl Default for ZoomPan {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoomPan {
    /// Creates a controller at scale 1.0 with the default bounds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scale: RESET_SCALE,
            offset: Point::ORIGIN,
            pan_anchor: None,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
        }
    }

    /// Creates a controller with custom scale bounds.
    ///
    /// The bounds must be finite, positive, ordered, and include the
    /// reset scale 1.0.
    pub fn with_bounds(min_scale: f32, max_scale: f32) -> Result<Self, ZoomError> {
        if !min_scale.is_finite() || !max_scale.is_finite() || min_scale <= 0.0 || min_scale > max_scale {
            return Err(ZoomError::InvalidBounds {
                min: min_scale,
                max: max_scale,
            });
        }
        if min_scale > RESET_SCALE || max_scale < RESET_SCALE {
            return Err(ZoomError::ResetScaleOutOfBounds {
                min: min_scale,
                max: max_scale,
            });
        }
        Ok(Self {
            min_scale,
            max_scale,
            ..Self::new()
        })
    }

    /// Current zoom scale.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Current pan offset, in pre-scale pixel units.
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Checks if a pan gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Applies a wheel delta: scrolling down zooms out, up zooms in.
    pub fn on_wheel(&mut self, delta_y: f32) {
        let multiplier = if delta_y > 0.0 { WHEEL_OUT } else { WHEEL_IN };
        self.set_scale(self.scale * multiplier);
    }

    /// Zooms in one step.
    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale * STEP_IN);
    }

    /// Zooms out one step.
    ///
    /// Landing at or below the reset scale clears any accumulated pan
    /// offset, so zooming back out always recenters the image.
    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale * STEP_OUT);
        if self.scale <= RESET_SCALE {
            self.offset = Point::ORIGIN;
        }
    }

    /// Restores scale 1.0 and a centered image, ending any pan gesture.
    pub fn reset(&mut self) {
        self.scale = RESET_SCALE;
        self.offset = Point::ORIGIN;
        self.pan_anchor = None;
    }

    /// Starts a pan gesture at `point`.
    ///
    /// Panning is only available while zoomed in; at scale 1.0 or below
    /// this is a no-op.
    pub fn on_pan_start(&mut self, point: Point) {
        if self.scale > RESET_SCALE {
            self.pan_anchor = Some(point);
        }
    }

    /// Continues a pan gesture, translating the offset by the cursor delta.
    pub fn on_pan_move(&mut self, point: Point) {
        if self.scale <= RESET_SCALE {
            return;
        }
        if let Some(anchor) = self.pan_anchor {
            self.offset.x += point.x - anchor.x;
            self.offset.y += point.y - anchor.y;
            self.pan_anchor = Some(point);
        }
    }

    /// Ends the pan gesture.
    pub fn on_pan_end(&mut self) {
        self.pan_anchor = None;
    }

    /// Derives the render transform for the current state.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            scale_factor: self.scale,
            translate_x: self.offset.x / self.scale,
            translate_y: self.offset.y / self.scale,
        }
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(self.min_scale, self.max_scale);
    }
}
