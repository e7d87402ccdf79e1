//! Error types for Picky operations.
//!
//! This module defines [`PickyError`], the error type used at the I/O
//! boundary, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Requirements parsing and diffing never fail; odd input just yields
//!   fewer entries
//! - Use `PickyError` for boundary failures that need distinct handling
//! - Use `anyhow::Error` (via `PickyError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Error type for Picky operations.
#[derive(Debug, Error)]
pub enum PickyError {
    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Dialect name not recognised.
    #[error("Unknown dialect: {name}")]
    UnknownDialect { name: String },

    /// Package manager listing command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Picky operations.
pub type Result<T> = std::result::Result<T, PickyError>;
