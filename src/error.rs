use thiserror::Error;

/// Top-level error type for the brickwork coursing engine.
#[derive(Debug, Error)]
pub enum BrickworkError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to wall-building operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`BrickworkError`].
pub type Result<T> = std::result::Result<T, BrickworkError>;
