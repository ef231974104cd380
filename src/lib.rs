//! SAIREN Survey: Directional Survey Calculations
//!
//! Wellbore trajectory geometry from MWD survey stations.
//!
//! ## Architecture
//!
//! - **Physics Engine**: Minimum curvature segment deltas and vertical section projection
//! - **Types**: Survey stations and calculation results
//! - **Config**: Per-well survey defaults (grid convergence, plan direction, length unit)

pub mod config;
pub mod physics_engine;
pub mod types;

// Re-export well configuration
pub use config::{LengthUnit, WellConfig};

// Re-export calculations
pub use physics_engine::{compute_segment, project_section, SurveyError};

// Re-export commonly used types
pub use types::{SectionProjection, SegmentDeltas, SurveyPair, SurveyStation};
