use log::debug;

use crate::error::RefractionError;
use crate::geo::Point3;
use crate::physics::projection::surface_projection;
use crate::physics::refraction::{BendingModel, ConstantShell, RefractionParams, delta_from_zenith};
use crate::physics::zenith::zenith_angle;

/// Full result of one correction, with the intermediate pipeline values kept
/// for diagnostics and validation.
#[derive(Debug, Clone, Copy)]
pub struct Correction {
    /// Apparent (refracted) ground-station position.
    pub refracted: Point3,
    /// Spacecraft zenith angle at its surface projection, radians.
    pub zenith_angle: f64,
    /// Chord distance from the projection to the ground station, meters.
    pub ground_distance: f64,
    /// Angular displacement between refracted and unrefracted lines of
    /// sight, radians.
    pub delta_angle: f64,
    /// Arc length subtended by `delta_angle` on the surface, meters.
    pub linear_displacement: f64,
}

/// Top of the pipeline: turns an unrefracted ground-station position into its
/// apparent position as seen from the spacecraft.
#[derive(Clone, Copy, Debug, Default)]
pub struct Corrector {
    pub refraction: RefractionParams,
}

impl Corrector {
    pub fn new(refraction: RefractionParams) -> Self {
        Self { refraction }
    }

    /// Refracted ground-station coordinates for one spacecraft/station pair,
    /// using the default constant-shell bending strategy.
    pub fn correct(
        &self,
        satellite: Point3,
        ground_station: Point3,
    ) -> Result<Point3, RefractionError> {
        Ok(self.correct_detailed(satellite, ground_station)?.refracted)
    }

    /// Same as [`Corrector::correct`] but with an explicit bending strategy.
    pub fn correct_with<M: BendingModel>(
        &self,
        satellite: Point3,
        ground_station: Point3,
        model: &M,
    ) -> Result<Point3, RefractionError> {
        Ok(self
            .correct_detailed_with(satellite, ground_station, model)?
            .refracted)
    }

    /// Correction with all intermediate values exposed.
    pub fn correct_detailed(
        &self,
        satellite: Point3,
        ground_station: Point3,
    ) -> Result<Correction, RefractionError> {
        let shell = ConstantShell::from(self.refraction);
        self.correct_detailed_with(satellite, ground_station, &shell)
    }

    pub fn correct_detailed_with<M: BendingModel>(
        &self,
        satellite: Point3,
        ground_station: Point3,
        model: &M,
    ) -> Result<Correction, RefractionError> {
        let earth_radius = self.refraction.earth_radius;

        let proj = surface_projection(satellite, earth_radius)?;
        let solution = zenith_angle(satellite, ground_station, earth_radius)?;
        let delta = delta_from_zenith(solution, ground_station, earth_radius, model)?;

        // Arc length subtended by the angular displacement; a small-angle
        // approximation that loses validity as `delta` grows
        let linear_displacement = earth_radius * delta;
        let ground_distance = proj.distance(ground_station);
        debug!(
            "delta angle {delta} rad, linear displacement {linear_displacement} m \
             over ground distance {ground_distance} m"
        );

        // Exact overhead case: nothing to correct
        let refracted = if linear_displacement == 0.0 {
            ground_station
        } else {
            if ground_distance == 0.0 {
                return Err(RefractionError::DivisionByZero {
                    displacement: linear_displacement,
                });
            }
            // Translate the station toward the spacecraft projection by the
            // linear displacement
            let direction = (proj - ground_station).scale(1.0 / ground_distance);
            ground_station + direction.scale(linear_displacement)
        };

        Ok(Correction {
            refracted,
            zenith_angle: solution.zenith_angle,
            ground_distance,
            delta_angle: delta,
            linear_displacement,
        })
    }

    /// Correct a batch of independent pairs. A failing pair does not abort
    /// the rest; each result is reported in input order.
    pub fn correct_batch(
        &self,
        pairs: &[(Point3, Point3)],
    ) -> Vec<Result<Point3, RefractionError>> {
        pairs
            .iter()
            .map(|&(satellite, ground_station)| self.correct(satellite, ground_station))
            .collect()
    }
}
