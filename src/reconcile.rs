//! Wiring collected sources to the requirements model.
//!
//! For each dialect, the installed listing and the requirements file are
//! collected, parsed with the dialect's codec, and diffed with the
//! installed side as `self`.

use std::path::{Path, PathBuf};

use crate::config::PickyConfig;
use crate::error::Result;
use crate::requirements::{Dialect, Requirements, RequirementsDiff};
use crate::source::{self, SourceOrigin, SourceText};

/// Outcome of reconciling one dialect.
#[derive(Debug, Clone)]
pub struct DialectReport {
    /// Dialect that was checked.
    pub dialect: Dialect,
    /// Packages reported by the package manager.
    pub installed: Requirements,
    /// Packages declared in the requirements file.
    pub specified: Requirements,
    /// Resolved executable, if one was found.
    pub tool: Option<PathBuf>,
    /// Whether the requirements file exists.
    pub file_found: bool,
    /// `installed.diff(&specified)`.
    pub diff: RequirementsDiff,
}

impl DialectReport {
    /// Build a report from already-collected text.
    pub fn from_sources(dialect: Dialect, installed: SourceText, specified: SourceText) -> Self {
        let tool = match &installed.origin {
            SourceOrigin::Command(path) => Some(path.clone()),
            _ => None,
        };
        let file_found = specified.is_available();
        let installed = installed.into_requirements(dialect);
        let specified = specified.into_requirements(dialect);
        let diff = installed.diff(&specified);

        Self {
            dialect,
            installed,
            specified,
            tool,
            file_found,
            diff,
        }
    }

    /// Whether the package manager was found.
    pub fn tool_found(&self) -> bool {
        self.tool.is_some()
    }

    /// Requirements file exists but there is nothing to compare it with.
    pub fn tool_missing(&self) -> bool {
        self.file_found && !self.tool_found()
    }

    /// Whether this dialect is in use at all.
    pub fn is_relevant(&self) -> bool {
        self.file_found || self.tool_found()
    }

    /// Whether installed and specified agree and nothing is missing.
    pub fn is_clean(&self) -> bool {
        !self.tool_missing() && self.diff.is_empty()
    }
}

/// Collects sources per dialect and builds reports.
pub struct Reconciler<'a> {
    config: &'a PickyConfig,
    project_root: PathBuf,
    search_path: Vec<PathBuf>,
}

impl<'a> Reconciler<'a> {
    /// Create a reconciler searching the system `PATH`.
    pub fn new(config: &'a PickyConfig, project_root: &Path) -> Self {
        Self::with_search_path(config, project_root, source::parse_system_path())
    }

    /// Create a reconciler with explicit search directories.
    pub fn with_search_path(
        config: &'a PickyConfig,
        project_root: &Path,
        search_path: Vec<PathBuf>,
    ) -> Self {
        Self {
            config,
            project_root: project_root.to_path_buf(),
            search_path,
        }
    }

    /// Requirements file used for `dialect`.
    pub fn requirements_path(&self, dialect: Dialect) -> PathBuf {
        self.config.requirements_path(dialect, &self.project_root)
    }

    /// Reconcile a single dialect.
    pub fn reconcile(&self, dialect: Dialect) -> Result<DialectReport> {
        let path = self.requirements_path(dialect);
        let command = self.config.command_path(dialect, &self.project_root);
        let installed = source::collect_installed(dialect, &command, &self.search_path)?;
        let specified = source::collect_specified(dialect, &path)?;

        let report = DialectReport::from_sources(dialect, installed, specified);

        tracing::debug!(
            "{}: {} installed, {} specified, {} differences",
            dialect,
            report.installed.len(),
            report.specified.len(),
            report.diff.len()
        );

        Ok(report)
    }

    /// Reconcile every enabled dialect.
    pub fn reconcile_all(&self) -> Result<Vec<DialectReport>> {
        self.config
            .enabled_dialects()
            .into_iter()
            .map(|d| self.reconcile(d))
            .collect()
    }
}
