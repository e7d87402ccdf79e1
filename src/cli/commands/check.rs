//! Check command implementation.
//!
//! The `picky check` command compares what each package manager reports as
//! installed with the matching requirements file, and fails when they
//! disagree.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::reconcile::{DialectReport, Reconciler};
use crate::requirements::{Dialect, LineCodec, RequirementsDiff};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    search_path: Option<Vec<PathBuf>>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
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

/// JSON view of one dialect's report.
#[derive(Debug, Serialize)]
struct ReportJson<'a> {
    dialect: Dialect,
    installed_source: &'a str,
    specified_source: &'a str,
    tool: Option<String>,
    file_found: bool,
    tool_missing: bool,
    diff: &'a RequirementsDiff,
}

impl<'a> From<&'a DialectReport> for ReportJson<'a> {
    fn from(report: &'a DialectReport) -> Self {
        Self {
            dialect: report.dialect,
            installed_source: report.installed.source(),
            specified_source: report.specified.source(),
            tool: report.tool.as_ref().map(|p| p.display().to_string()),
            file_found: report.file_found,
            tool_missing: report.tool_missing(),
            diff: &report.diff,
        }
    }
}

/// Describe every difference in `report`, one line each.
pub fn describe_differences(report: &DialectReport) -> Vec<String> {
    let installed = report.installed.source();
    let specified = report.specified.source();
    let codec = report.dialect;
    let mut lines = Vec::with_capacity(report.diff.len());

    for entry in &report.diff.only_in_self {
        lines.push(format!(
            "{} used by {} but not specified in {}",
            codec.serialise_line(&entry.name, &entry.version),
            installed,
            specified
        ));
    }
    for entry in &report.diff.only_in_other {
        lines.push(format!(
            "{} specified in {} but not used by {}",
            codec.serialise_line(&entry.name, &entry.version),
            specified,
            installed
        ));
    }
    for mismatch in &report.diff.mismatched {
        lines.push(format!(
            "{}: expected {}, found {}",
            mismatch.name, mismatch.theirs, mismatch.ours
        ));
    }

    lines
}

fn render_report(ui: &mut dyn UserInterface, report: &DialectReport) {
    if !report.is_relevant() {
        if ui.output_mode().shows_details() {
            ui.message(&format!(
                "{}: neither {} nor {} found, skipping",
                report.dialect,
                report.dialect.tool(),
                report.specified.source()
            ));
        }
        return;
    }

    ui.show_header(&format!(
        "{} vs {}",
        report.installed.source(),
        report.specified.source()
    ));

    if report.tool_missing() {
        ui.error(&format!(
            "{} found but {} missing",
            report.specified.source(),
            report.dialect
        ));
        return;
    }

    if ui.output_mode().shows_details() {
        ui.message(&format!(
            "{} installed, {} specified",
            report.installed.len(),
            report.specified.len()
        ));
    }

    for line in describe_differences(report) {
        ui.message(&line);
    }

    if report.diff.is_empty() {
        ui.success(&format!(
            "{} matches {}",
            report.specified.source(),
            report.installed.source()
        ));
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self
            .args
            .sources
            .resolve_config(&self.project_root, self.config_path.as_deref())?;

        let reconciler = match &self.search_path {
            Some(dirs) => Reconciler::with_search_path(&config, &self.project_root, dirs.clone()),
            None => Reconciler::new(&config, &self.project_root),
        };
        let reports = reconciler.reconcile_all()?;

        if self.args.json {
            let view: Vec<ReportJson<'_>> = reports.iter().map(ReportJson::from).collect();
            let json = serde_json::to_string_pretty(&view).map_err(anyhow::Error::from)?;
            ui.data(&json);
        } else {
            for report in &reports {
                render_report(ui, report);
            }
        }

        if reports.iter().all(DialectReport::is_clean) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::SourceArgs;
    use crate::reconcile::DialectReport;
    use crate::source::{SourceOrigin, SourceText};
    use crate::ui::{MockUI, OutputMode};
    use std::fs;
    use tempfile::TempDir;

    fn only_pip() -> CheckArgs {
        CheckArgs {
            json: false,
            sources: SourceArgs {
                only: Some("pip".to_string()),
                ..Default::default()
            },
        }
    }

    fn pip_report(installed: &str, specified: &str) -> DialectReport {
        DialectReport::from_sources(
            Dialect::Pip,
            SourceText {
                text: installed.to_string(),
                label: "pip freeze".to_string(),
                origin: SourceOrigin::Command(PathBuf::from("/usr/bin/pip")),
            },
            SourceText {
                text: specified.to_string(),
                label: "requirements.txt".to_string(),
                origin: SourceOrigin::File(PathBuf::from("requirements.txt")),
            },
        )
    }

    #[test]
    fn describes_each_kind_of_difference() {
        let report = pip_report(
            "numpy==1.21.0\nrequests==2.26.0\nsix==1.16.0\n",
            "numpy==1.21.0\nrequests==2.25.0\nflask==2.0.1\n",
        );

        let lines = describe_differences(&report);
        assert_eq!(
            lines,
            vec![
                "six==1.16.0 used by pip freeze but not specified in requirements.txt",
                "flask==2.0.1 specified in requirements.txt but not used by pip freeze",
                "requests: expected 2.25.0, found 2.26.0",
            ]
        );
    }

    #[test]
    fn json_view_serialises_dialect_by_name() {
        let mut report = pip_report("a==1\n", "a==2\n");
        let json = serde_json::to_value(ReportJson::from(&report)).unwrap();
        assert_eq!(json["dialect"], "pip");
        assert_eq!(json["tool"], "/usr/bin/pip");

        report.dialect = Dialect::Conda;
        let json = serde_json::to_value(ReportJson::from(&report)).unwrap();
        assert_eq!(json["dialect"], "conda");
    }

    #[test]
    fn matching_sets_report_success() {
        let mut ui = MockUI::new();
        render_report(&mut ui, &pip_report("a==1\n", "a==1\n"));
        assert!(ui.has_success("requirements.txt matches pip freeze"));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn verbose_mentions_skipped_dialect() {
        let report = DialectReport::from_sources(
            Dialect::Conda,
            SourceText {
                text: String::new(),
                label: "conda list -e".to_string(),
                origin: SourceOrigin::Unavailable,
            },
            SourceText {
                text: String::new(),
                label: "conda_versions.txt".to_string(),
                origin: SourceOrigin::Unavailable,
            },
        );
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        render_report(&mut ui, &report);
        assert!(ui.has_message("conda: neither conda nor conda_versions.txt found"));
        assert!(ui.headers().is_empty());
    }

    #[test]
    fn missing_tool_with_file_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "flask==2.0.1\n").unwrap();
        let empty = TempDir::new().unwrap();

        let cmd = CheckCommand::new(temp.path(), None, only_pip())
            .with_search_path(vec![empty.path().to_path_buf()]);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("requirements.txt found but pip missing"));
    }

    #[test]
    fn nothing_to_check_succeeds() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), None, CheckArgs::default())
            .with_search_path(vec![]);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn json_output_lists_reports() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("requirements.txt"), "flask==2.0.1\n").unwrap();

        let mut args = only_pip();
        args.json = true;
        let cmd = CheckCommand::new(temp.path(), None, args).with_search_path(vec![]);
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.data_output()[0]).unwrap();
        assert_eq!(json[0]["dialect"], "pip");
        assert_eq!(json[0]["tool_missing"], true);
        assert_eq!(json[0]["diff"]["only_in_other"][0]["name"], "flask");
    }

    #[cfg(unix)]
    #[test]
    fn mismatch_with_fake_pip_fails() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let pip = bin.join("pip");
        fs::write(&pip, "#!/bin/sh\necho 'numpy==1.21.0'\necho 'requests==2.26.0'\n").unwrap();
        fs::set_permissions(&pip, fs::Permissions::from_mode(0o755)).unwrap();
        fs::write(
            temp.path().join("requirements.txt"),
            "numpy==1.21.0\nrequests==2.25.0\n",
        )
        .unwrap();

        let cmd = CheckCommand::new(temp.path(), None, only_pip()).with_search_path(vec![bin]);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("requests: expected 2.25.0, found 2.26.0"));
        assert_eq!(ui.headers(), ["pip freeze vs requirements.txt"]);
    }
}
