use thiserror::Error;

/// Top-level error type for the sweetspot engine.
#[derive(Debug, Error, PartialEq)]
pub enum SweetspotError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to ingested geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("{role} point has a non-finite coordinate")]
    NonFiniteCoordinate { role: &'static str },
}

/// Errors raised when a caller breaks an operation's contract.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("at least {required} speakers are required, got {supplied}")]
    InsufficientSpeakers { supplied: usize, required: usize },
}

/// Convenience type alias for results using [`SweetspotError`].
pub type Result<T> = std::result::Result<T, SweetspotError>;
