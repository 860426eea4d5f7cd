//! Synthesizes validation cases: spacecraft positions at prescribed zenith
//! angles for ground stations placed on a coordinate axis.
//!
//! Test-data supplier only; nothing in the correction pipeline depends on it.

use crate::geo::{EARTH_RADIUS, Point3};

/// Spacecraft altitude above the surface used by all generated cases, meters.
pub const FIXTURE_ALTITUDE: f64 = 500_000.0;

/// Positive coordinate axis a ground station sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationAxis {
    X,
    Y,
    Z,
}

/// One generated spacecraft/ground-station pair.
#[derive(Debug, Clone, Copy)]
pub struct FixtureCase {
    pub ground_station: Point3,
    pub satellite: Point3,
    /// Zenith angle the spacecraft position was synthesized for, radians.
    pub zenith_angle: f64,
}

pub fn station_on_axis(axis: StationAxis) -> Point3 {
    match axis {
        StationAxis::X => Point3::new(EARTH_RADIUS, 0.0, 0.0),
        StationAxis::Y => Point3::new(0.0, EARTH_RADIUS, 0.0),
        StationAxis::Z => Point3::new(0.0, 0.0, EARTH_RADIUS),
    }
}

/// Spacecraft position at [`FIXTURE_ALTITUDE`] whose zenith angle, seen from
/// its surface projection, equals `zenith_deg` for a station on `axis`.
///
/// Construction: the flat zenith triangle gives the ground distance
/// `d = tan(zen) * altitude`; intersecting the circle of radius
/// `EARTH_RADIUS` with the chord `d` from the station yields the projection
/// point, which is then pushed radially out to the spacecraft altitude. The
/// solve is planar, so one transverse coordinate is always zero.
///
/// Panics if `d` exceeds the sphere diameter (no such chord exists); with the
/// 500 km altitude that happens above roughly 88 degrees.
pub fn case_at_zenith(axis: StationAxis, zenith_deg: f64) -> FixtureCase {
    let r = EARTH_RADIUS;
    let zenith_angle = zenith_deg.to_radians();
    let ground_distance = zenith_angle.tan() * FIXTURE_ALTITUDE;
    assert!(
        ground_distance <= 2.0 * r,
        "ground distance {ground_distance} m exceeds the sphere diameter"
    );

    // Chord of length `ground_distance` from the station, on the circle:
    // coordinate along the station axis and the in-plane transverse one
    let along = (2.0 * r * r - ground_distance * ground_distance) / (2.0 * r);
    let across = (r * r - along * along).sqrt();

    // Radial push from the projection out to the spacecraft altitude
    let t = (r + FIXTURE_ALTITUDE) / r;
    let satellite = match axis {
        StationAxis::X => Point3::new(t * along, t * across, 0.0),
        StationAxis::Y => Point3::new(t * across, t * along, 0.0),
        StationAxis::Z => Point3::new(t * across, 0.0, t * along),
    };

    FixtureCase {
        ground_station: station_on_axis(axis),
        satellite,
        zenith_angle,
    }
}

/// Integer-degree series for one axis. Stops at 87 degrees: beyond that the
/// flat-triangle ground distance outgrows the sphere diameter.
pub fn series(axis: StationAxis) -> Vec<FixtureCase> {
    (0..=87).map(|deg| case_at_zenith(axis, f64::from(deg))).collect()
}
