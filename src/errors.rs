//! Errors raised by argument validation

use crate::float_types::Real;

/// All the invalid-argument and precondition failures the kernel reports.
///
/// Numerical degeneracies (division by a zero-length vector, rotating between
/// parallel directions) are **not** errors: they propagate as IEEE special
/// values or no-ops.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VecMathError {
    /// (ZeroScale) A scale factor of zero would produce a singular matrix
    #[error("(ZeroScale) scale by 0 not allowed: ({x}, {y}, {z})")]
    ZeroScale { x: Real, y: Real, z: Real },
    /// (IndexOutOfRange) A component or matrix index is outside its valid range
    #[error("(IndexOutOfRange) illegal index {index}, expected 0..{len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// (TooManyComponents) More than three values were passed to a vector setter
    #[error("(TooManyComponents) expected number of components <= 3, got: {0}")]
    TooManyComponents(usize),
    /// (ValueCountNotMultiple) A flat value list does not split into whole vectors
    #[error("(ValueCountNotMultiple) number of specified values ({count}) must be a multiple of {group}")]
    ValueCountNotMultiple { count: usize, group: usize },
    /// (WrongValueCount) A fixed-size value list has the wrong length
    #[error("(WrongValueCount) expected {expected} values, got: {actual}")]
    WrongValueCount { expected: usize, actual: usize },
    /// (InsufficientPoints) A spline needs at least `required` control points
    #[error("(InsufficientPoints) spline requires at least {required} points, got: {actual}")]
    InsufficientPoints { required: usize, actual: usize },
    /// (SplineNotCalculated) The spline was evaluated before (re)calculating its cubics
    #[error("(SplineNotCalculated) call calc_spline() after adding points and before evaluating")]
    SplineNotCalculated,
    /// (ParameterOutOfRange) A spline position outside `[0, 1)`
    #[error("(ParameterOutOfRange) spline position {0} is outside [0, 1)")]
    ParameterOutOfRange(Real),
}
