//! Configuration validation rules.
//!
//! - At least one dialect must be enabled
//! - Configured file and command values must not be blank

use crate::config::schema::PickyConfig;
use crate::error::{PickyError, Result};
use crate::requirements::Dialect;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Dialect if the error is dialect-specific
    pub dialect: Option<Dialect>,
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &PickyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.enabled_dialects().is_empty() {
        errors.push(ValidationError {
            rule: "no-dialects".to_string(),
            message: "Every dialect is disabled; nothing to check".to_string(),
            dialect: None,
        });
    }

    for dialect in Dialect::ALL {
        let settings = config.dialect(dialect);

        if settings
            .file
            .as_ref()
            .is_some_and(|f| f.as_os_str().is_empty())
        {
            errors.push(ValidationError {
                rule: "empty-file".to_string(),
                message: format!("'{}.file' must not be empty", dialect),
                dialect: Some(dialect),
            });
        }

        if settings
            .command
            .as_deref()
            .is_some_and(|c| c.trim().is_empty())
        {
            errors.push(ValidationError {
                rule: "empty-command".to_string(),
                message: format!("'{}.command' must not be empty", dialect),
                dialect: Some(dialect),
            });
        }
    }

    errors
}

/// Validate a configuration, failing on the first error.
pub fn validate(config: &PickyConfig) -> Result<()> {
    match validate_config(config).into_iter().next() {
        Some(err) => Err(PickyError::ConfigValidationError {
            message: err.message,
        }),
        None => Ok(()),
    }
}
