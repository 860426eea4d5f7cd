use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Mean Earth radius of the spherical model, in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Cartesian position in an Earth-centered inertial frame (e.g. GCI), meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Point3 {
        Point3 { x, y, z }
    }

    /// Distance from the Earth center (vector magnitude).
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn scale(&self, t: f64) -> Point3 {
        Point3 {
            x: t * self.x,
            y: t * self.y,
            z: t * self.z,
        }
    }

    /// Straight-line (chord) distance to `other`, not great-circle arc.
    pub fn distance(&self, other: Point3) -> f64 {
        (*self - other).norm()
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_and_distance() {
        let p = Point3::new(3.0, 4.0, 0.0);
        assert_eq!(p.norm(), 5.0);
        assert_eq!(p.distance(Point3::new(3.0, 0.0, 0.0)), 4.0);
    }

    #[test]
    fn test_scale() {
        let p = Point3::new(1.0, -2.0, 0.5).scale(2.0);
        assert_eq!(p, Point3::new(2.0, -4.0, 1.0));
    }
}
