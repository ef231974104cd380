//! Closure and vertical section projection

use crate::types::SectionProjection;

/// Calculate closure and vertical section from accumulated displacement
///
/// Formulas:
/// - Closure distance = √(N² + E²)
/// - Closure azimuth  = atan(E / N), or 0 when N = 0
/// - Directional difference = closure azimuth - plan direction
/// - VS = closure distance × cos(plan direction - closure azimuth)
///
/// The closure azimuth uses single-argument atan, so it stays within
/// (-90°, 90°) and does not resolve the southern quadrants. A due-east or
/// due-west closure (N = 0) reports an azimuth of 0.
///
/// `plan_direction` in degrees. Returns angles in degrees and lengths in the
/// input unit.
pub fn project_section(northing: f64, easting: f64, plan_direction: f64) -> SectionProjection {
    let closure_distance = northing.hypot(easting);

    let closure_azimuth = if northing == 0.0 {
        0.0
    } else {
        (easting / northing).atan().to_degrees()
    };

    let directional_difference = closure_azimuth - plan_direction;
    let vertical_section =
        closure_distance * (plan_direction - closure_azimuth).to_radians().cos();

    SectionProjection {
        directional_difference,
        closure_distance,
        closure_azimuth,
        vertical_section,
    }
}
