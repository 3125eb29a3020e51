// src/error.rs

use thiserror::Error;

/// Errors surfaced by map generation and lookup.
#[derive(Debug, Error)]
pub enum MapGenError {
    /// A generation parameter is out of its allowed range. Raised before any
    /// map is carved, so a batch is never partially produced.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("map index {index} out of range (map set holds {len} maps)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The connectivity check rejected every candidate for one column before
    /// the retry cap was reached.
    #[error("map {map}: column {column} found no connected corridor after {attempts} attempts")]
    GenerationFailed {
        map: usize,
        column: usize,
        attempts: u32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MapGenError>;

impl MapGenError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        MapGenError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
