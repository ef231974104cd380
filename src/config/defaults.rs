//! System-wide default constants.
//!
//! Grouped by subsystem for easy discovery.

// ============================================================================
// Survey Calculations
// ============================================================================

/// Reporting interval for dogleg severity (length units).
///
/// Oilfield convention is °/30 m or °/100 ft; this library always reports per
/// 30 units of whatever length unit the caller uses.
pub const DOGLEG_SEVERITY_INTERVAL: f64 = 30.0;

// ============================================================================
// Config Loading
// ============================================================================

/// Environment variable holding an explicit config file path.
pub const CONFIG_ENV_VAR: &str = "SAIREN_SURVEY_CONFIG";

/// Config file looked up in the current working directory.
pub const CONFIG_FILE_NAME: &str = "survey_config.toml";

/// Maximum Levenshtein distance for "did you mean" key suggestions.
pub const MAX_KEY_SUGGESTION_DISTANCE: usize = 3;

// ============================================================================
// Physical Ranges
// ============================================================================

/// Grid convergence beyond this magnitude is rejected (degrees).
pub const MAX_GRID_CONVERGENCE_DEG: f64 = 180.0;

/// Grid convergence beyond this magnitude is suspicious (degrees).
///
/// Transverse Mercator zones keep convergence within a few degrees.
pub const TYPICAL_GRID_CONVERGENCE_DEG: f64 = 5.0;
