//! Config validation: unknown-key detection with Levenshtein suggestions
//! and physical range checks.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

use super::defaults::{
    MAX_GRID_CONVERGENCE_DEG, MAX_KEY_SUGGESTION_DISTANCE, TYPICAL_GRID_CONVERGENCE_DEG,
};

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for `WellConfig`.
///
/// Maintained by hand to match the struct hierarchy in `well_config.rs`.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [well]
        "well",
        "well.name",
        "well.field",
        "well.rig",
        // [survey]
        "survey",
        "survey.grid_convergence_deg",
        "survey.vertical_section_azimuth_deg",
        "survey.length_unit",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively collect every dotted key path in a TOML value.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let toml::Value::Table(table) = value {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            keys.extend(walk_toml_keys(v, &path));
        }
    }
    keys
}

// ============================================================================
// Levenshtein Suggestions
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (k, levenshtein(unknown, k)))
        .filter(|&(_, dist)| dist <= MAX_KEY_SUGGESTION_DISTANCE)
        // Tie-break on the key so the result does not depend on HashSet order
        .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
        .map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys, it only warns.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new(); // parse errors are handled by serde later
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Physical Range Validation
// ============================================================================

/// Validate physical ranges on a parsed `WellConfig`.
///
/// Returns (errors, warnings). Errors are impossible values that must be
/// rejected; warnings are suspicious but not fatal.
pub fn validate_physical_ranges(
    config: &super::WellConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let s = &config.survey;

    // NaN/Inf comparisons silently pass range checks, catch them explicitly
    if !s.grid_convergence_deg.is_finite() {
        errors.push(format!(
            "survey.grid_convergence_deg = {} must be finite",
            s.grid_convergence_deg
        ));
    } else if s.grid_convergence_deg.abs() > MAX_GRID_CONVERGENCE_DEG {
        errors.push(format!(
            "survey.grid_convergence_deg = {:.2} is outside physical range (±{:.0}°)",
            s.grid_convergence_deg, MAX_GRID_CONVERGENCE_DEG
        ));
    } else if s.grid_convergence_deg.abs() > TYPICAL_GRID_CONVERGENCE_DEG {
        warnings.push(ValidationWarning {
            field: "survey.grid_convergence_deg".to_string(),
            message: format!(
                "grid_convergence_deg = {:.2} is outside typical range (±{:.0}°)",
                s.grid_convergence_deg, TYPICAL_GRID_CONVERGENCE_DEG
            ),
            suggestion: None,
        });
    }

    let vs = s.vertical_section_azimuth_deg;
    if !vs.is_finite() {
        errors.push(format!(
            "survey.vertical_section_azimuth_deg = {vs} must be finite"
        ));
    } else if !(0.0..360.0).contains(&vs) {
        warnings.push(ValidationWarning {
            field: "survey.vertical_section_azimuth_deg".to_string(),
            message: format!(
                "vertical_section_azimuth_deg = {vs:.2} is outside 0-360°, it will be used as given"
            ),
            suggestion: None,
        });
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
