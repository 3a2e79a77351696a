//! Error types for TOC generation.
//!
//! Document scanning is total over any input, so the only failures the
//! library reports are malformed options, caught before any scan begins.

use thiserror::Error;

/// Result type for option validation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Invalid heading-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A level bound lies outside 1-6
    #[error("{name} must be between 1 and 6, got {value}")]
    LevelOutOfRange { name: &'static str, value: usize },
    /// The minimum level exceeds the maximum level
    #[error("min-level ({min}) cannot be greater than max-level ({max})")]
    InvertedRange { min: usize, max: usize },
}
