//! Minimum curvature survey calculations
//!
//! The wellbore between two survey stations is modelled as a circular arc.
//! The straight-line (balanced tangential) average of the two station
//! directions is scaled by a ratio factor so the displacement lands on that arc.
//!
//! Reference: Zaremba, "Directional Survey by the Circular Arc Method",
//! SPE-3362-PA.

use super::SurveyError;
use crate::config::defaults::DOGLEG_SEVERITY_INTERVAL;
use crate::types::{SegmentDeltas, SurveyPair};

/// Calculate the dogleg angle between two survey directions
///
/// Formula: DL = acos(cos(I₂ - I₁) - sin(I₁) × sin(I₂) × (1 - cos(A₂ - A₁)))
///
/// All angles in radians. The acos argument is clamped to [-1, 1] since
/// rounding can push it just past -1 when the stations point in nearly
/// opposite directions.
///
/// Returns the dogleg in radians (0 to π)
pub fn dogleg_angle(inclination_1: f64, azimuth_1: f64, inclination_2: f64, azimuth_2: f64) -> f64 {
    let cos_dogleg = (inclination_2 - inclination_1).cos()
        - inclination_1.sin() * inclination_2.sin() * (1.0 - (azimuth_2 - azimuth_1).cos());

    cos_dogleg.clamp(-1.0, 1.0).acos()
}

/// Calculate the minimum curvature ratio factor
///
/// Formula: RF = 2 × tan(DL / 2) / DL
///
/// RF → 1 as DL → 0, so a zero dogleg falls back to balanced tangential (RF = 1).
pub fn ratio_factor(dogleg: f64) -> f64 {
    if dogleg != 0.0 {
        2.0 * (dogleg / 2.0).tan() / dogleg
    } else {
        1.0
    }
}

/// Calculate TVD, northing and easting change plus dogleg severity for one
/// survey segment using the minimum curvature method
///
/// Inputs:
/// - `course_length` = measured depth between stations (ft or m)
/// - `azimuth_1`, `inclination_1` = upper station (degrees)
/// - `azimuth_2`, `inclination_2` = lower station (degrees)
/// - `convergence` = grid convergence subtracted from both azimuths (degrees)
///
/// Formulas (ΔMD = course length, RF = ratio factor):
/// - ΔTVD = ΔMD/2 × (cos I₁ + cos I₂) × RF
/// - ΔN   = ΔMD/2 × (sin I₁ cos A₁ + sin I₂ cos A₂) × RF
/// - ΔE   = ΔMD/2 × (sin I₁ sin A₁ + sin I₂ sin A₂) × RF
/// - DLS  = DL° × 30 / ΔMD
///
/// Returns `SurveyError::ZeroCourseLength` when the stations coincide; there
/// is no segment to describe and the severity would divide by zero.
pub fn compute_segment(
    course_length: f64,
    azimuth_1: f64,
    inclination_1: f64,
    azimuth_2: f64,
    inclination_2: f64,
    convergence: f64,
) -> Result<SegmentDeltas, SurveyError> {
    if course_length == 0.0 {
        return Err(SurveyError::ZeroCourseLength);
    }
    if !course_length.is_finite() || course_length < 0.0 {
        return Err(SurveyError::InvalidCourseLength(course_length));
    }

    let inc_1 = inclination_1.to_radians();
    let inc_2 = inclination_2.to_radians();
    let az_1 = (azimuth_1 - convergence).to_radians();
    let az_2 = (azimuth_2 - convergence).to_radians();

    let dogleg = dogleg_angle(inc_1, az_1, inc_2, az_2);
    let dogleg_severity = dogleg.to_degrees() * (DOGLEG_SEVERITY_INTERVAL / course_length);

    let half_course_rf = 0.5 * course_length * ratio_factor(dogleg);

    let tvd = half_course_rf * (inc_1.cos() + inc_2.cos());
    let northing = half_course_rf * (inc_1.sin() * az_1.cos() + inc_2.sin() * az_2.cos());
    let easting = half_course_rf * (inc_1.sin() * az_1.sin() + inc_2.sin() * az_2.sin());

    Ok(SegmentDeltas {
        tvd,
        northing,
        easting,
        dogleg_severity,
    })
}

impl SurveyPair {
    /// Minimum curvature deltas for this pair (see [`compute_segment`]).
    pub fn segment(&self) -> Result<SegmentDeltas, SurveyError> {
        compute_segment(
            self.course_length,
            self.upper.azimuth_deg,
            self.upper.inclination_deg,
            self.lower.azimuth_deg,
            self.lower.inclination_deg,
            self.convergence_deg,
        )
    }
}
