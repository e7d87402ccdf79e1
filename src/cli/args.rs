//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{load_config, validate, PickyConfig};
use crate::error::Result;
use crate::requirements::Dialect;

/// Picky - check installed pip and conda packages against your requirements.
#[derive(Debug, Parser)]
#[command(name = "picky")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .picky.yml)
    #[arg(short, long, global = true, env = "PICKY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare installed packages with requirements files (default)
    Check(CheckArgs),

    /// Rewrite requirements files from installed packages
    Update(UpdateArgs),

    /// Print the requirements of one dialect
    Show(ShowArgs),
}

/// Overrides for where requirements come from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SourceArgs {
    /// Pip requirements file
    #[arg(long, value_name = "PATH", env = "PICKY_PIP_REQUIREMENTS")]
    pub pip_requirements: Option<PathBuf>,

    /// Conda versions file
    #[arg(long, value_name = "PATH", env = "PICKY_CONDA_VERSIONS")]
    pub conda_versions: Option<PathBuf>,

    /// Pip executable to run
    #[arg(long, value_name = "COMMAND")]
    pub pip_command: Option<String>,

    /// Conda executable to run
    #[arg(long, value_name = "COMMAND")]
    pub conda_command: Option<String>,

    /// Only handle this dialect (pip or conda)
    #[arg(long, value_name = "DIALECT")]
    pub only: Option<String>,
}

impl SourceArgs {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply(&self, config: &mut PickyConfig) -> Result<()> {
        if let Some(path) = &self.pip_requirements {
            config.pip.file = Some(path.clone());
        }
        if let Some(path) = &self.conda_versions {
            config.conda.file = Some(path.clone());
        }
        if let Some(command) = &self.pip_command {
            config.pip.command = Some(command.clone());
        }
        if let Some(command) = &self.conda_command {
            config.conda.command = Some(command.clone());
        }
        if let Some(only) = &self.only {
            let only: Dialect = only.parse()?;
            for dialect in Dialect::ALL {
                config.dialect_mut(dialect).enabled = dialect == only;
            }
        }
        Ok(())
    }

    /// Load `.picky.yml` (or `config_override`), apply overrides, and validate.
    pub fn resolve_config(
        &self,
        project_root: &Path,
        config_override: Option<&Path>,
    ) -> Result<PickyConfig> {
        let mut config = load_config(project_root, config_override)?;
        self.apply(&mut config)?;
        validate(&config)?;
        Ok(config)
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub sources: SourceArgs,
}

/// Arguments for the `update` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UpdateArgs {
    /// Print the new file contents instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub sources: SourceArgs,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Dialect to show (pip or conda)
    pub dialect: String,

    /// Show the requirements file instead of installed packages
    #[arg(long)]
    pub specified: bool,

    #[command(flatten)]
    pub sources: SourceArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickyError;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::parse_from(["picky"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_parses_json_and_overrides() {
        let cli = Cli::parse_from([
            "picky",
            "check",
            "--json",
            "--pip-requirements",
            "reqs.txt",
            "--only",
            "pip",
        ]);
        match cli.command {
            Some(Commands::Check(args)) => {
                assert!(args.json);
                assert_eq!(
                    args.sources.pip_requirements,
                    Some(PathBuf::from("reqs.txt"))
                );
                assert_eq!(args.sources.only.as_deref(), Some("pip"));
            }
            other => panic!("Expected Check, got {:?}", other),
        }
    }

    #[test]
    fn show_requires_dialect() {
        assert!(Cli::try_parse_from(["picky", "show"]).is_err());
        let cli = Cli::parse_from(["picky", "show", "conda", "--specified"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Show(ShowArgs { specified: true, .. }))
        ));
    }

    #[test]
    fn apply_sets_paths_and_commands() {
        let args = SourceArgs {
            conda_versions: Some(PathBuf::from("env/conda.txt")),
            pip_command: Some("pip3".to_string()),
            ..Default::default()
        };
        let mut config = PickyConfig::default();
        args.apply(&mut config).unwrap();

        assert_eq!(config.conda.file, Some(PathBuf::from("env/conda.txt")));
        assert_eq!(config.command(Dialect::Pip), "pip3");
    }

    #[test]
    fn apply_only_disables_other_dialects() {
        let args = SourceArgs {
            only: Some("conda".to_string()),
            ..Default::default()
        };
        let mut config = PickyConfig::default();
        args.apply(&mut config).unwrap();

        assert_eq!(config.enabled_dialects(), vec![Dialect::Conda]);
    }

    #[test]
    fn apply_rejects_unknown_dialect() {
        let args = SourceArgs {
            only: Some("npm".to_string()),
            ..Default::default()
        };
        let mut config = PickyConfig::default();
        assert!(matches!(
            args.apply(&mut config),
            Err(PickyError::UnknownDialect { .. })
        ));
    }
}
