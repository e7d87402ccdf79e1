//! Configuration schema for `.picky.yml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::requirements::Dialect;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickyConfig {
    /// Settings for the pip dialect.
    pub pip: DialectConfig,

    /// Settings for the conda dialect.
    pub conda: DialectConfig,
}

/// Per-dialect settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialectConfig {
    /// Whether this dialect is checked at all.
    pub enabled: bool,

    /// Requirements file, relative to the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Executable to run instead of the dialect's default tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
            command: None,
        }
    }
}

impl PickyConfig {
    /// Settings for a dialect.
    pub fn dialect(&self, dialect: Dialect) -> &DialectConfig {
        match dialect {
            Dialect::Pip => &self.pip,
            Dialect::Conda => &self.conda,
        }
    }

    /// Mutable settings for a dialect.
    pub fn dialect_mut(&mut self, dialect: Dialect) -> &mut DialectConfig {
        match dialect {
            Dialect::Pip => &mut self.pip,
            Dialect::Conda => &mut self.conda,
        }
    }

    /// Dialects that are switched on, in reporting order.
    pub fn enabled_dialects(&self) -> Vec<Dialect> {
        Dialect::ALL
            .into_iter()
            .filter(|d| self.dialect(*d).enabled)
            .collect()
    }

    /// Requirements file for a dialect, resolved against `project_root`.
    pub fn requirements_path(&self, dialect: Dialect, project_root: &Path) -> PathBuf {
        let file = self
            .dialect(dialect)
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(dialect.default_file()));
        project_root.join(file)
    }

    /// Executable name or path for a dialect.
    pub fn command(&self, dialect: Dialect) -> &str {
        self.dialect(dialect)
            .command
            .as_deref()
            .unwrap_or(dialect.tool())
    }

    /// Executable for a dialect as it should be looked up.
    ///
    /// A relative command with a directory part, such as `venv/bin/pip`,
    /// is taken relative to `project_root`. Bare names are left for a
    /// `PATH` search.
    pub fn command_path(&self, dialect: Dialect, project_root: &Path) -> PathBuf {
        let command = Path::new(self.command(dialect));
        if command.is_relative() && command.components().count() > 1 {
            project_root.join(command)
        } else {
            command.to_path_buf()
        }
    }
}
