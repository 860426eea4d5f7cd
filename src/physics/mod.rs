pub mod atmosphere;
pub mod projection;
pub mod refraction;
pub mod zenith;
