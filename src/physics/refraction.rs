use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::RefractionError;
use crate::geo::{EARTH_RADIUS, Point3};
use crate::physics::atmosphere::{AtmosphereParams, refractive_index};
use crate::physics::zenith::{ZenithSolution, zenith_angle};

/// Geometric parameters of the refraction correction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RefractionParams {
    /// Radius of the reference sphere, meters.
    pub earth_radius: f64,
    /// Height of the single effective refracting shell above the surface,
    /// meters.
    pub shell_height: f64,
}

impl Default for RefractionParams {
    fn default() -> Self {
        Self {
            earth_radius: EARTH_RADIUS,
            shell_height: 15.0,
        }
    }
}

/// Strategy for how the atmosphere bends the line of sight.
///
/// Maps the unrefracted closure angle `z0` of the refraction triangle to the
/// apparent (refracted) zenith angle at the ground station. Implementors must
/// be thread-safe so batches can run in parallel.
pub trait BendingModel: Send + Sync {
    fn apparent_zenith(&self, z0: f64, ground_station: Point3) -> Result<f64, RefractionError>;
}

/// Single effective refracting shell at a fixed height above the surface.
///
/// The default strategy: `zed = asin(sin(z0) * R / (R + h))`, a flat-shell
/// stand-in for integrating the refractive-index profile.
#[derive(Debug, Clone, Copy)]
pub struct ConstantShell {
    pub earth_radius: f64,
    pub shell_height: f64,
}

impl From<RefractionParams> for ConstantShell {
    fn from(params: RefractionParams) -> Self {
        Self {
            earth_radius: params.earth_radius,
            shell_height: params.shell_height,
        }
    }
}

impl BendingModel for ConstantShell {
    fn apparent_zenith(&self, z0: f64, _ground_station: Point3) -> Result<f64, RefractionError> {
        checked_asin(z0.sin() * self.earth_radius / (self.earth_radius + self.shell_height))
    }
}

/// Single-layer Snell's law using the tropospheric refractive index at the
/// ground station: `zed = asin(sin(z0) / mu)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLayerSnell {
    pub atmosphere: AtmosphereParams,
}

impl BendingModel for SingleLayerSnell {
    fn apparent_zenith(&self, z0: f64, ground_station: Point3) -> Result<f64, RefractionError> {
        let mu = refractive_index(ground_station, &self.atmosphere);
        checked_asin(z0.sin() / mu)
    }
}

fn checked_asin(arg: f64) -> Result<f64, RefractionError> {
    if !(-1.0..=1.0).contains(&arg) {
        return Err(RefractionError::GeometryInconsistency { value: arg });
    }
    Ok(arg.asin())
}

/// Angular displacement between the refracted and unrefracted lines of sight,
/// with the default constant-shell strategy.
pub fn delta_angle(
    satellite: Point3,
    ground_station: Point3,
    params: &RefractionParams,
) -> Result<f64, RefractionError> {
    delta_angle_with(
        satellite,
        ground_station,
        params.earth_radius,
        &ConstantShell::from(*params),
    )
}

/// Angular displacement with an arbitrary bending strategy.
pub fn delta_angle_with<M: BendingModel>(
    satellite: Point3,
    ground_station: Point3,
    earth_radius: f64,
    model: &M,
) -> Result<f64, RefractionError> {
    let solution = zenith_angle(satellite, ground_station, earth_radius)?;
    delta_from_zenith(solution, ground_station, earth_radius, model)
}

/// Angular displacement for an already-solved zenith triangle.
pub fn delta_from_zenith<M: BendingModel>(
    solution: ZenithSolution,
    ground_station: Point3,
    earth_radius: f64,
    model: &M,
) -> Result<f64, RefractionError> {
    // Central angle at the Earth center subtended by the station's offset
    // from the spacecraft projection
    let theta = solution.ground_distance / earth_radius;

    // Closure angle of the refraction triangle
    let z0 = solution.zenith_angle + theta;

    let zed = model.apparent_zenith(z0, ground_station)?;
    trace!("theta {theta} rad, z0 {z0} rad, apparent zenith {zed} rad");

    Ok(z0 - zed)
}
