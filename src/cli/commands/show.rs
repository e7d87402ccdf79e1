//! Show command implementation.
//!
//! `picky show <dialect>` prints the normalised requirements of one side,
//! in the dialect's own format.

use std::path::{Path, PathBuf};

use crate::cli::args::ShowArgs;
use crate::error::Result;
use crate::reconcile::Reconciler;
use crate::requirements::Dialect;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The show command implementation.
pub struct ShowCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    search_path: Option<Vec<PathBuf>>,
    args: ShowArgs,
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ShowArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            search_path: None,
            args,
        }
    }

    /// Look for package managers in these directories instead of `PATH`.
    pub fn with_search_path(mut self, search_path: Vec<PathBuf>) -> Self {
        self.search_path = Some(search_path);
        self
    }
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dialect: Dialect = self.args.dialect.parse()?;
        let config = self
            .args
            .sources
            .resolve_config(&self.project_root, self.config_path.as_deref())?;

        let reconciler = match &self.search_path {
            Some(dirs) => Reconciler::with_search_path(&config, &self.project_root, dirs.clone()),
            None => Reconciler::new(&config, &self.project_root),
        };
        let report = reconciler.reconcile(dialect)?;

        let (requirements, available) = if self.args.specified {
            (&report.specified, report.file_found)
        } else {
            (&report.installed, report.tool_found())
        };

        if !available {
            ui.error(&format!("{} not found", requirements.source()));
            return Ok(CommandResult::failure(1));
        }

        tracing::debug!("{} entries from {}", requirements.len(), requirements.source());
        if !requirements.is_empty() {
            ui.data(&requirements.serialise());
        }

        Ok(CommandResult::success())
    }
}
