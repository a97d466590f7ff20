use thiserror::Error;

/// Errors reported by the fallible spline and editing operations.
///
/// The plain accessors (`control_point`, `set_control_point`) panic on a bad
/// index like slice indexing does; the `try_` variants return these instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplineError {
    #[error("control point index {index} out of bounds for spline with {len} points")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("a spline needs 3n + 1 control points with n >= 1, got {len}")]
    InvalidPointCount { len: usize },
    #[error("no control point is selected")]
    NoSelection,
    #[error("transform is not invertible")]
    SingularTransform,
}
