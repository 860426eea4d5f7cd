use thiserror::Error;

use crate::geo::Point3;

/// Errors raised by the correction pipeline.
///
/// All computations are deterministic, so none of these is retryable; a batch
/// caller should record the failure for the offending pair and move on.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RefractionError {
    /// A position vector for which the requested quantity is undefined:
    /// the origin (no direction to project along), or a spacecraft exactly
    /// at surface altitude (zenith angle undefined).
    #[error("degenerate input: {reason} (position {position:?})")]
    DegenerateInput {
        position: Point3,
        reason: &'static str,
    },

    /// An intermediate value fell outside its mathematically required domain.
    #[error("geometry inconsistency: arcsine argument {value} outside [-1, 1]")]
    GeometryInconsistency { value: f64 },

    /// The spacecraft projection coincides with the ground station while a
    /// nonzero displacement was computed, leaving no translation direction.
    #[error(
        "division by zero: projection coincides with ground station but displacement is {displacement} m"
    )]
    DivisionByZero { displacement: f64 },
}
