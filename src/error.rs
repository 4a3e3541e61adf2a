use thiserror::Error;

/// Errors raised when constructing geometric primitives.
///
/// Numeric kernel functions never error; out-of-domain inputs there yield
/// unspecified values instead.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate trace: endpoints coincide at ({x}, {y})")]
    DegenerateTrace { x: f64, y: f64 },
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
