//! Requirement dialects and their line codecs.
//!
//! A dialect is one package manager's text format for listing packages.
//! Each dialect knows how to turn a single line into a `(name, version)`
//! pair and how to write such a pair back out.

use std::fmt;
use std::str::FromStr;

use crate::error::PickyError;

/// Line-level encoding for a requirements dialect.
///
/// Implementations must satisfy the round-trip law: for any name and
/// version free of `=` and `#`, `parse_line(&serialise_line(n, v))`
/// returns `Some((n, v))`.
pub trait LineCodec {
    /// Parse one line of text into a `(name, version)` pair.
    ///
    /// Lines that do not fit the dialect yield `None`.
    fn parse_line(&self, line: &str) -> Option<(String, String)>;

    /// Render a `(name, version)` pair as one line of text.
    fn serialise_line(&self, name: &str, version: &str) -> String;
}

/// Supported package manager dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `pip freeze` output and `requirements.txt` files (`name==version`).
    Pip,
    /// `conda list -e` output and `conda_versions.txt` files
    /// (`name=version=build`).
    Conda,
}

impl Dialect {
    /// All known dialects, in reporting order.
    pub const ALL: [Dialect; 2] = [Dialect::Pip, Dialect::Conda];

    /// Name of the package manager executable.
    pub fn tool(&self) -> &'static str {
        match self {
            Self::Pip => "pip",
            Self::Conda => "conda",
        }
    }

    /// Arguments that make the tool list installed packages in this dialect.
    pub fn listing_args(&self) -> &'static [&'static str] {
        match self {
            Self::Pip => &["freeze"],
            Self::Conda => &["list", "-e"],
        }
    }

    /// Default requirements file name for this dialect.
    pub fn default_file(&self) -> &'static str {
        match self {
            Self::Pip => "requirements.txt",
            Self::Conda => "conda_versions.txt",
        }
    }

    /// Human-readable label for the installed-package listing.
    pub fn listing_label(&self) -> String {
        let mut parts = vec![self.tool()];
        parts.extend_from_slice(self.listing_args());
        parts.join(" ")
    }

    fn separator(&self) -> &'static str {
        match self {
            Self::Pip => "==",
            Self::Conda => "=",
        }
    }
}

/// Drop everything from the first `#` onward.
fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

impl LineCodec for Dialect {
    fn parse_line(&self, line: &str) -> Option<(String, String)> {
        let line = strip_comment(line);
        match self {
            Self::Pip => {
                let (name, rest) = line.split_once("==")?;
                // Anything after a second `==` is not part of the version.
                let version = rest.split("==").next().unwrap_or(rest);
                Some((name.trim().to_string(), version.trim().to_string()))
            }
            Self::Conda => {
                let mut parts = line.split('=').map(str::trim);
                let name = parts.next()?;
                let version = parts.next()?;
                Some((name.to_string(), version.to_string()))
            }
        }
    }

    fn serialise_line(&self, name: &str, version: &str) -> String {
        format!("{}{}{}", name, self.separator(), version)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool())
    }
}

impl FromStr for Dialect {
    type Err = PickyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pip" => Ok(Self::Pip),
            "conda" => Ok(Self::Conda),
            _ => Err(PickyError::UnknownDialect {
                name: s.to_string(),
            }),
        }
    }
}
