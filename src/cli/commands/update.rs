//! Update command implementation.
//!
//! The `picky update` command rewrites each requirements file so that it
//! pins exactly what the package manager reports as installed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::UpdateArgs;
use crate::error::Result;
use crate::reconcile::Reconciler;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    search_path: Option<Vec<PathBuf>>,
    args: UpdateArgs,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: UpdateArgs) -> Self {
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

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self
            .args
            .sources
            .resolve_config(&self.project_root, self.config_path.as_deref())?;

        let reconciler = match &self.search_path {
            Some(dirs) => Reconciler::with_search_path(&config, &self.project_root, dirs.clone()),
            None => Reconciler::new(&config, &self.project_root),
        };

        let mut handled = 0;
        for dialect in config.enabled_dialects() {
            let report = reconciler.reconcile(dialect)?;
            let path = reconciler.requirements_path(dialect);

            if !report.tool_found() {
                if report.file_found {
                    ui.warning(&format!(
                        "{} not found; leaving {} unchanged",
                        dialect,
                        path.display()
                    ));
                }
                continue;
            }
            handled += 1;

            if report.file_found && report.diff.is_empty() {
                ui.success(&format!("{} is up to date", report.specified.source()));
                continue;
            }

            let mut content = report.installed.serialise();
            if !content.is_empty() {
                content.push('\n');
            }

            if self.args.dry_run {
                ui.show_header(&format!("{} (dry run)", path.display()));
                ui.data(content.trim_end());
                continue;
            }

            fs::write(&path, &content)?;
            tracing::info!("Wrote {} entries to {}", report.installed.len(), path.display());
            ui.success(&format!(
                "Wrote {} packages from {} to {}",
                report.installed.len(),
                report.installed.source(),
                report.specified.source()
            ));
        }

        if handled == 0 {
            ui.error("No package manager found; nothing to update");
            return Ok(CommandResult::failure(1));
        }

        Ok(CommandResult::success())
    }
}
