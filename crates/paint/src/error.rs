//! Paint configuration error types

use thiserror::Error;

/// Paint configuration result type
pub type PaintResult<T> = Result<T, PaintError>;

/// Paint configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaintError {
    #[error("Invalid rotation: {0} (expected 0-3)")]
    InvalidRotation(String),

    #[error("Unknown height marker unit: {0}")]
    UnknownHeightUnit(String),
}
