//! Survey station and calculation result types

use serde::{Deserialize, Serialize};

/// A single directional survey station.
///
/// Angles are in degrees as reported by the MWD tool. They do not need to be
/// normalised to `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurveyStation {
    /// Hole direction clockwise from north (degrees)
    pub azimuth_deg: f64,
    /// Angle from vertical (degrees), 0 = vertical, 90 = horizontal
    pub inclination_deg: f64,
}

impl SurveyStation {
    pub const fn new(azimuth_deg: f64, inclination_deg: f64) -> Self {
        Self {
            azimuth_deg,
            inclination_deg,
        }
    }
}

/// Two consecutive survey stations and the course length between them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurveyPair {
    /// Measured-depth difference between the stations (length units)
    pub course_length: f64,
    /// Shallower station
    pub upper: SurveyStation,
    /// Deeper station
    pub lower: SurveyStation,
    /// Grid convergence subtracted from both azimuths (degrees)
    #[serde(default)]
    pub convergence_deg: f64,
}

impl SurveyPair {
    pub const fn new(course_length: f64, upper: SurveyStation, lower: SurveyStation) -> Self {
        Self {
            course_length,
            upper,
            lower,
            convergence_deg: 0.0,
        }
    }

    /// Apply a grid convergence correction to both azimuths.
    #[must_use]
    pub fn with_convergence(mut self, convergence_deg: f64) -> Self {
        self.convergence_deg = convergence_deg;
        self
    }
}

/// Position change across one survey segment (minimum curvature).
///
/// Lengths are in the same unit as the course length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentDeltas {
    /// True vertical depth change (positive downwards)
    pub tvd: f64,
    /// Northing change
    pub northing: f64,
    /// Easting change
    pub easting: f64,
    /// Dogleg severity (degrees per 30 length units)
    pub dogleg_severity: f64,
}

/// Closure and vertical section for an accumulated horizontal displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionProjection {
    /// Closure azimuth minus plan direction (degrees, not normalised)
    pub directional_difference: f64,
    /// Horizontal distance from the reference point
    pub closure_distance: f64,
    /// Direction of the closure (degrees), 0 when northing is exactly zero
    pub closure_azimuth: f64,
    /// Closure projected onto the plan direction (signed)
    pub vertical_section: f64,
}
