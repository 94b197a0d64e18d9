use thiserror::Error;

/// Shared error type for all molpipe operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("Index out of bounds: ({row}, {col}) for matrix of shape ({rows}, {cols})")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Empty matrix")]
    EmptyMatrix,

    #[error("Singular matrix: cannot solve linear system")]
    SingularMatrix,

    #[error("Failed to decode identifier at index {index} ({input:?}): {reason}")]
    Decode {
        index: usize,
        input: String,
        reason: String,
    },

    #[error("Invalid configuration: {param} must be positive, got {value}")]
    InvalidConfig { param: &'static str, value: usize },

    #[error("{0} has not been fitted")]
    NotFitted(&'static str),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
