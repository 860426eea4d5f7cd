use log::trace;

use crate::error::RefractionError;
use crate::geo::Point3;
use crate::physics::projection::surface_projection;

/// Solved zenith triangle between a spacecraft, its surface projection and a
/// ground station.
#[derive(Debug, Clone, Copy)]
pub struct ZenithSolution {
    /// Zenith angle of the spacecraft as seen from its projection, radians.
    pub zenith_angle: f64,
    /// Chord distance from the projection to the ground station, meters.
    pub ground_distance: f64,
}

/// Solve the triangle spacecraft / surface projection / ground station for
/// the spacecraft zenith angle.
///
/// The side between the projection and the station is taken as the straight
/// chord, treating the Earth surface between them as flat. The approximation
/// degrades as the two points separate.
pub fn zenith_angle(
    satellite: Point3,
    ground_station: Point3,
    earth_radius: f64,
) -> Result<ZenithSolution, RefractionError> {
    let proj = surface_projection(satellite, earth_radius)?;
    trace!("surface projection {proj:?}");

    let ground_distance = proj.distance(ground_station);
    let height = satellite.norm() - earth_radius;
    if height <= 0.0 {
        return Err(RefractionError::DegenerateInput {
            position: satellite,
            reason: "spacecraft at or below surface altitude, zenith angle undefined",
        });
    }

    let zenith_angle = (ground_distance / height).atan();
    trace!("zenith angle {zenith_angle} rad, ground distance {ground_distance} m");

    Ok(ZenithSolution {
        zenith_angle,
        ground_distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::EARTH_RADIUS;

    #[test]
    fn test_overhead_zenith_is_zero() {
        let sat = Point3::new(EARTH_RADIUS + 500_000.0, 0.0, 0.0);
        let gs = Point3::new(EARTH_RADIUS, 0.0, 0.0);
        let sol = zenith_angle(sat, gs, EARTH_RADIUS).unwrap();
        assert!(sol.zenith_angle.abs() < 1e-12);
        assert!(sol.ground_distance.abs() < 1e-6);
    }

    #[test]
    fn test_surface_spacecraft_rejected() {
        // Spacecraft exactly on the sphere: must fail, never return inf/NaN
        let sat = Point3::new(0.0, EARTH_RADIUS, 0.0);
        let gs = Point3::new(EARTH_RADIUS, 0.0, 0.0);
        let err = zenith_angle(sat, gs, EARTH_RADIUS).unwrap_err();
        assert!(matches!(err, RefractionError::DegenerateInput { .. }));
    }
}
