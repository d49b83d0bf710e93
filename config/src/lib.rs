//! # Config Crate
//!
//! Centralized configuration constants for the frustum mesh generator.
//! Side-count bounds, the fallback segment, tolerances and output defaults
//! live here so the mesh library and the command line agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{sides_in_range, DEFAULT_SIDES, MAX_SIDES, MIN_SIDES};
//!
//! assert!(sides_in_range(DEFAULT_SIDES as f64));
//! assert!(!sides_in_range((MAX_SIDES + 1) as f64));
//! assert!(MIN_SIDES >= 3);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain values and tiny helpers only

pub mod constants;
