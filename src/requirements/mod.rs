//! Requirements parsing and reconciliation model.
//!
//! This module turns the text produced by a package manager, or found in a
//! requirements file, into an ordered name to version collection, and
//! compares two such collections.
//!
//! # Modules
//!
//! - [`dialect`] - Line codecs for pip and conda formats
//! - [`set`] - The [`Requirements`] collection
//! - [`diff`] - Comparison results
//!
//! # Example
//!
//! ```
//! use picky::requirements::{Dialect, Requirements};
//!
//! let installed = Requirements::parse("numpy==1.21.0\nrequests==2.26.0\n", Dialect::Pip, "pip freeze");
//! let specified = Requirements::parse("numpy==1.21.0\nrequests==2.25.0\n", Dialect::Pip, "requirements.txt");
//!
//! let diff = installed.diff(&specified);
//! assert_eq!(diff.mismatched[0].name, "requests");
//! assert_eq!(diff.mismatched[0].ours, "2.26.0");
//! ```

pub mod dialect;
pub mod diff;
pub mod set;

pub use dialect::{Dialect, LineCodec};
pub use diff::{RequirementsDiff, VersionMismatch};
pub use set::{PackageEntry, Requirements};
