//! Collecting raw requirements text from the environment.
//!
//! This is the I/O boundary in front of [`crate::requirements`]. It finds a
//! package manager on `PATH`, runs its listing command, or reads a
//! requirements file, and hands back the text with a label for reporting.
//! When a tool or file is absent the text is simply empty.
//!
//! # Modules
//!
//! - [`command`] - Subprocess execution for listing commands

pub mod command;

pub use command::run_listing;

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::requirements::{Dialect, Requirements};

/// Where a block of requirements text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Output of an executable found at this path.
    Command(PathBuf),
    /// Contents of this file.
    File(PathBuf),
    /// Nothing was available; the text is empty.
    Unavailable,
}

/// Raw text collected for one side of a comparison.
#[derive(Debug, Clone)]
pub struct SourceText {
    /// The collected text, possibly empty.
    pub text: String,
    /// Human-readable label, e.g. `pip freeze` or `requirements.txt`.
    pub label: String,
    /// Where the text came from.
    pub origin: SourceOrigin,
}

impl SourceText {
    /// Whether the source actually existed.
    pub fn is_available(&self) -> bool {
        self.origin != SourceOrigin::Unavailable
    }

    /// Parse the text with the given dialect.
    pub fn into_requirements(self, dialect: Dialect) -> Requirements {
        Requirements::parse(&self.text, dialect, self.label)
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// A tool given with a directory component is checked directly instead.
pub fn resolve_tool_path(tool: &Path, path_entries: &[PathBuf]) -> Option<PathBuf> {
    if tool.components().count() > 1 {
        return (tool.is_file() && is_executable(tool)).then(|| tool.to_path_buf());
    }

    for dir in path_entries {
        for name in candidate_names(tool.as_os_str()) {
            let candidate = dir.join(&name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(windows)]
fn candidate_names(tool: &OsStr) -> Vec<OsString> {
    ["", ".exe", ".bat"]
        .into_iter()
        .map(|ext| {
            let mut name = tool.to_os_string();
            name.push(ext);
            name
        })
        .collect()
}

#[cfg(not(windows))]
fn candidate_names(tool: &OsStr) -> Vec<OsString> {
    vec![tool.to_os_string()]
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Collect the installed-package listing for `dialect`.
///
/// `tool` is the executable to look for, normally [`Dialect::tool`].
pub fn collect_installed(
    dialect: Dialect,
    tool: &Path,
    path_entries: &[PathBuf],
) -> Result<SourceText> {
    let label = dialect.listing_label();

    match resolve_tool_path(tool, path_entries) {
        Some(executable) => {
            let executable = std::path::absolute(&executable).unwrap_or(executable);
            tracing::info!("Using {} for {}", executable.display(), dialect);
            let text = run_listing(&executable, dialect.listing_args())?;
            Ok(SourceText {
                text,
                label,
                origin: SourceOrigin::Command(executable),
            })
        }
        None => {
            tracing::debug!("{:?} not found", tool);
            Ok(SourceText {
                text: String::new(),
                label,
                origin: SourceOrigin::Unavailable,
            })
        }
    }
}

/// Collect the declared requirements for `dialect` from `path`.
pub fn collect_specified(dialect: Dialect, path: &Path) -> Result<SourceText> {
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    if path.exists() {
        tracing::info!("Using {} for {}", path.display(), dialect);
        let text = String::from_utf8_lossy(&fs::read(path)?).into_owned();
        Ok(SourceText {
            text,
            label,
            origin: SourceOrigin::File(path.to_path_buf()),
        })
    } else {
        tracing::debug!("{:?} not found", path);
        Ok(SourceText {
            text: String::new(),
            label,
            origin: SourceOrigin::Unavailable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn resolve_tool_path_misses_unknown_tool() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            resolve_tool_path(Path::new("picky-no-such-tool"), &[temp.path().to_path_buf()]),
            None
        );
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pip"), "not a program").unwrap();
        assert_eq!(resolve_tool_path(Path::new("pip"), &[temp.path().to_path_buf()]), None);
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_takes_first_match() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let expected = write_script(first.path(), "pip", "true");
        write_script(second.path(), "pip", "true");

        let found = resolve_tool_path(
            Path::new("pip"),
            &[first.path().to_path_buf(), second.path().to_path_buf()],
        );
        assert_eq!(found, Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_accepts_explicit_path() {
        let temp = TempDir::new().unwrap();
        let script = write_script(temp.path(), "my-pip", "true");
        let found = resolve_tool_path(&script, &[]);
        assert_eq!(found, Some(script));
    }

    #[test]
    fn collect_installed_without_tool_is_empty() {
        let temp = TempDir::new().unwrap();
        let source =
            collect_installed(Dialect::Conda, Path::new("conda"), &[temp.path().to_path_buf()]).unwrap();
        assert!(source.text.is_empty());
        assert_eq!(source.label, "conda list -e");
        assert!(!source.is_available());
    }

    #[cfg(unix)]
    #[test]
    fn collect_installed_runs_listing() {
        let temp = TempDir::new().unwrap();
        write_script(
            temp.path(),
            "pip",
            r#"[ "$1" = "freeze" ] && echo "numpy==1.21.0""#,
        );

        let source = collect_installed(Dialect::Pip, Path::new("pip"), &[temp.path().to_path_buf()]).unwrap();
        assert!(source.is_available());
        assert_eq!(source.label, "pip freeze");

        let reqs = source.into_requirements(Dialect::Pip);
        assert_eq!(reqs.get("numpy"), Some("1.21.0"));
        assert_eq!(reqs.source(), "pip freeze");
    }

    #[test]
    fn collect_specified_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        fs::write(&path, "flask==2.0.1\n").unwrap();

        let source = collect_specified(Dialect::Pip, &path).unwrap();
        assert_eq!(source.text, "flask==2.0.1\n");
        assert_eq!(source.label, "requirements.txt");
        assert_eq!(source.origin, SourceOrigin::File(path));
    }

    #[test]
    fn collect_specified_tolerates_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("requirements.txt");
        fs::write(&path, b"numpy==1.21.0\n\xff\xfe==1.0\nflask==2.0.1\n").unwrap();

        let source = collect_specified(Dialect::Pip, &path).unwrap();
        let reqs = source.into_requirements(Dialect::Pip);
        assert_eq!(reqs.get("numpy"), Some("1.21.0"));
        assert_eq!(reqs.get("flask"), Some("2.0.1"));
        assert_eq!(reqs.len(), 3);
    }

    #[test]
    fn collect_specified_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let source =
            collect_specified(Dialect::Conda, &temp.path().join("conda_versions.txt")).unwrap();
        assert!(source.text.is_empty());
        assert_eq!(source.label, "conda_versions.txt");
        assert!(!source.is_available());
    }
}
