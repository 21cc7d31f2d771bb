//! Simulation error types

use thiserror::Error;

/// Errors raised by grid operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// A coordinate outside `[0, rows) × [0, cols)` was addressed
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },
}

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, LifeError>;
