use thiserror::Error;

/// Top-level error type for ROI construction.
#[derive(Debug, Error)]
pub enum RoiError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("non-finite coordinate in input")]
    NonFinite,
}

/// Errors related to boundary operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while validating user-supplied scale and depth values.
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("{parameter} is not a number: {value:?}")]
    Unparseable {
        parameter: &'static str,
        value: String,
    },

    #[error("{parameter} must be a positive finite number, got {value}")]
    NotPositive { parameter: &'static str, value: f64 },
}

/// Errors related to the per-client session store.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found")]
    NotFound,
}

/// Convenience type alias for results using [`RoiError`].
pub type Result<T> = std::result::Result<T, RoiError>;
