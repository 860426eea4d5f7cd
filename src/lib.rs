pub mod correction;
pub mod error;
pub mod fixtures;
pub mod geo;
pub mod physics;


pub use correction::{Correction, Corrector};
pub use error::RefractionError;
pub use geo::{EARTH_RADIUS, Point3};
pub use physics::refraction::RefractionParams;
