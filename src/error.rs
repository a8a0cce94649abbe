//! Error types for the bounded map
//!
//! The container itself is infallible; errors only come from signed or
//! textual inputs (limit conversion and environment configuration).

use thiserror::Error;

// == Map Error Enum ==
/// Unified error type for the bounded map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Size limit below zero
    #[error("Negative size limit: {0}")]
    NegativeSizeLimit(i64),

    /// Age limit below zero
    #[error("Negative age limit: {0}")]
    NegativeAgeLimit(String),

    /// Configuration variable could not be parsed
    #[error("Invalid configuration: {var}={value:?}")]
    InvalidConfig { var: String, value: String },
}

// == Result Type Alias ==
/// Convenience Result type for the bounded map.
pub type Result<T> = std::result::Result<T, MapError>;
