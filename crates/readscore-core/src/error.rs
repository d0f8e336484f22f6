//! Error types for readscore-core.
//!
//! Scoring itself never fails. These errors cover configuration loading and
//! the caller-side publish validation in [`crate::content`].

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors reported when content fails publish validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The content is empty or whitespace-only.
    #[error("content is empty")]
    EmptyContent,

    /// The trimmed content is shorter than the configured minimum.
    #[error("content too short: {chars} characters (minimum: {min})")]
    ContentTooShort {
        /// Length of the trimmed content in UTF-16 code units.
        chars: usize,
        /// Minimum required characters.
        min: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
