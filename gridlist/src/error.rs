//! Grid layout error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("column count must be at least 1")]
    ZeroColumns,

    #[error("invalid {field}: {value} (must be finite and non-negative)")]
    InvalidDimension { field: &'static str, value: f32 },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
