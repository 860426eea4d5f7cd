use crate::error::RefractionError;
use crate::geo::Point3;

/// Project a point in space onto the sphere of radius `earth_radius`, along
/// the ray from the Earth center through the point.
///
/// Solving the intersection of that ray with the sphere reduces to scaling
/// every coordinate by `earth_radius / |p|`.
pub fn surface_projection(p: Point3, earth_radius: f64) -> Result<Point3, RefractionError> {
    let dist = p.norm();
    if dist == 0.0 {
        return Err(RefractionError::DegenerateInput {
            position: p,
            reason: "cannot project the origin onto the sphere",
        });
    }
    Ok(p.scale(earth_radius / dist))
}
