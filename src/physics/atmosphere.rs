use serde::{Deserialize, Serialize};

use crate::geo::{EARTH_RADIUS, Point3};

/// Approximate altitude of the tropopause above the reference sphere, meters.
/// The lapse-rate model below is only meaningful underneath it.
pub const TROPOPAUSE_ALTITUDE: f64 = 10_500.0;

/// Physical constants of the tropospheric refractive-index model
/// (Noerdlinger 1999).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AtmosphereParams {
    /// Mean tropospheric molecular weight, kg/kmol.
    pub molecular_weight: f64,
    /// Mean sea-level acceleration of gravity, m/s².
    pub gravity: f64,
    /// Ideal gas constant, J/(kmol·K).
    pub gas_constant: f64,
    /// Tropospheric temperature lapse rate, K/m.
    pub lapse_rate: f64,
    /// Mean sea-level temperature, K.
    pub sea_level_temp: f64,
    /// Scale factor of the refractivity term.
    pub refractivity_scale: f64,
    /// Radius of the reference sphere, meters.
    pub earth_radius: f64,
}

impl Default for AtmosphereParams {
    fn default() -> Self {
        Self {
            molecular_weight: 28.825,
            gravity: 9.805,
            gas_constant: 8314.3,
            lapse_rate: 0.0065,
            sea_level_temp: 273.15,
            refractivity_scale: 0.0002905,
            earth_radius: EARTH_RADIUS,
        }
    }
}

/// Refractive index of the troposphere at the altitude of `p` above the
/// reference sphere, from the barometric lapse-rate law:
///
/// `index = 1 + k * (1 - L*alt/T0) ^ (M*g/(R*L) - 1)`
///
/// Modeling limitation: valid only for altitudes strictly below
/// [`TROPOPAUSE_ALTITUDE`]; the result above it is not meaningful and callers
/// must not evaluate it there.
pub fn refractive_index(p: Point3, params: &AtmosphereParams) -> f64 {
    let altitude = p.norm() - params.earth_radius;

    // Fractional temperature drop between sea level and the observer
    let temp_factor = 1.0 - params.lapse_rate * altitude / params.sea_level_temp;

    // Barometric exponent of the density profile
    let gamma =
        params.molecular_weight * params.gravity / (params.gas_constant * params.lapse_rate) - 1.0;

    1.0 + params.refractivity_scale * temp_factor.powf(gamma)
}
