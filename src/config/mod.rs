//! Configuration loading, parsing, and validation for Picky.
//!
//! Configuration is optional. Picky looks for `.picky.yml` in the project
//! root and falls back to defaults when it is absent:
//!
//! ```yaml
//! pip:
//!   file: requirements.txt
//!   command: pip
//! conda:
//!   enabled: false
//! ```
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use picky::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".picky.yml"), "conda:\n  enabled: false\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert!(!config.conda.enabled);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{config_path, load_config, load_config_file, parse_config, CONFIG_FILE};
pub use schema::{DialectConfig, PickyConfig};
pub use validator::{validate, validate_config, ValidationError};
