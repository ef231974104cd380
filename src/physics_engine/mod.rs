//! Physics Engine Module
//!
//! Deterministic directional survey calculations. Every function here is
//! pure: no logging, no config lookups, no shared state.
//!
//! - `compute_segment()` - Minimum curvature deltas between two stations
//! - `project_section()` - Closure and vertical section from northing/easting

pub mod minimum_curvature;
pub mod vertical_section;

pub use minimum_curvature::{compute_segment, dogleg_angle, ratio_factor};
pub use vertical_section::project_section;

use thiserror::Error;

/// Errors from survey geometry calculations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SurveyError {
    /// Both stations sit at the same measured depth, so there is no segment.
    #[error("Cannot calculate a survey segment with zero course length between stations")]
    ZeroCourseLength,

    #[error("Invalid course length between stations: {0}")]
    InvalidCourseLength(f64),
}
