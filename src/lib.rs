//! Interaction logic for UI widgets
//!
//! This library provides the framework-agnostic computation behind three
//! interactive widgets: a password strength meter, a pagination control,
//! and an image zoom/pan viewer. The hosting presentation shell owns all
//! rendering and event plumbing and calls into these modules as plain
//! functions and small state machines.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable strength
//!   evaluation delivered over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use widget_kernel::{evaluate, visible_pages, StrengthLevel, ZoomPan};
//! use secrecy::SecretString;
//!
//! // Score a candidate password
//! let password = SecretString::new("Tr0ub4dor&9Zx".to_string().into());
//! let report = evaluate(&password);
//! assert_eq!(report.level, StrengthLevel::Strong);
//!
//! // Compute the visible page window
//! assert_eq!(visible_pages(5, 10, 5), vec![3, 4, 5, 6, 7]);
//!
//! // Zoom into an image and pan it
//! let mut viewer = ZoomPan::new();
//! viewer.zoom_in();
//! let transform = viewer.transform();
//! assert!(transform.scale_factor > 1.0);
//! ```

// Internal modules
pub mod pagination;
pub mod strength;
pub mod zoom;

// Public API
pub use pagination::{Pager, PagerError, visible_pages};
pub use strength::{
    REQUIREMENTS, Requirement, StrengthLevel, StrengthReport, evaluate, generate_strong_password,
    generate_with_rng,
};
pub use zoom::{Point, Transform, ZoomError, ZoomPan};

#[cfg(feature = "async")]
pub use strength::evaluate_tx;
