//! Picky - keep installed Python packages honest.
//!
//! Picky compares the packages a package manager reports as installed
//! (`pip freeze`, `conda list -e`) with the versions pinned in a
//! requirements file, and reports every difference.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.picky.yml` loading and validation
//! - [`error`] - Error types and result aliases
//! - [`reconcile`] - Per-dialect comparison of installed and specified packages
//! - [`requirements`] - Dialect codecs, the requirements collection, and diffs
//! - [`source`] - Locating package managers and reading requirements files
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use picky::requirements::{Dialect, Requirements};
//!
//! let installed = Requirements::parse("numpy=1.21.0=py39h1234\n", Dialect::Conda, "conda list -e");
//! let specified = Requirements::parse("numpy=1.21.0\n", Dialect::Conda, "conda_versions.txt");
//! assert!(installed.diff(&specified).is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod requirements;
pub mod source;
pub mod ui;

pub use error::{PickyError, Result};
