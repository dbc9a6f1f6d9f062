use thiserror::Error;

use crate::Range;

/// Errors reported while building a ring slider from its configuration.
///
/// Drag samples never produce an error: a sample that would break the range
/// invariants is dropped and reported as a [`Rejection`](crate::Rejection).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Outer radius is not a finite positive number.
    #[error("outer radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
    /// Stroke thickness is negative or not finite.
    #[error("stroke thickness must be finite and non-negative, got {0}")]
    InvalidStroke(f64),
    /// The stroke is too thick for the radius to leave an inner area.
    #[error(
        "stroke {stroke} leaves no room inside radius {radius} (inner radius is radius - 2 * stroke)"
    )]
    NoInnerRadius {
        /// Outer radius.
        radius: f64,
        /// Stroke thickness.
        stroke: f64,
    },
    /// Cut-off is outside `[0, 100)`.
    #[error("cut-off must be a percentage in [0, 100), got {0}")]
    InvalidCutOff(f64),
    /// Label scale is not a finite positive number.
    #[error("max value must be finite and positive, got {0}")]
    InvalidMaxValue(f64),
    /// The initial range is not finite, or its handles are too close or
    /// inside the gap.
    #[error("initial range {range:?} violates the slider invariants: {reason}")]
    InvalidInitialRange {
        /// The offending range.
        range: Range,
        /// Which check failed.
        reason: &'static str,
    },
}
