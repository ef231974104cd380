//! Survey Configuration Module
//!
//! Per-well survey settings loaded from TOML: grid convergence, the
//! vertical-section plan direction and the length unit used for reporting.
//!
//! ## Loading Order
//!
//! 1. `SAIREN_SURVEY_CONFIG` environment variable (path to TOML file)
//! 2. `survey_config.toml` in the current working directory
//! 3. Built-in defaults
//!
//! The calculation functions in `physics_engine` never read this config.
//! Callers resolve defaults here and pass plain numbers in.
//!
//! ```ignore
//! let config = WellConfig::load();
//! let deltas = compute_segment(30.0, 10.0, 5.0, 12.0, 6.0, config.survey.grid_convergence_deg)?;
//! ```

mod well_config;
pub mod defaults;
pub mod validation;

pub use well_config::*;
