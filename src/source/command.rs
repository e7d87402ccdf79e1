//! Running a package manager's listing command.

use crate::error::{PickyError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Run `program` with `args` and return its standard output, decoded lossily.
///
/// Standard error is discarded. A non-zero exit status is reported as
/// [`PickyError::CommandFailed`].
pub fn run_listing(program: &Path, args: &[&str]) -> Result<String> {
    let start = Instant::now();
    let command = command_line(program, args);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| {
            tracing::debug!("Failed to spawn {}: {}", command, e);
            PickyError::CommandFailed {
                command: command.clone(),
                code: None,
            }
        })?;

    if !output.status.success() {
        return Err(PickyError::CommandFailed {
            command,
            code: output.status.code(),
        });
    }

    tracing::debug!("{} finished in {:?}", command, start.elapsed());

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn command_line(program: &Path, args: &[&str]) -> String {
    let mut parts = vec![program.display().to_string()];
    parts.extend(args.iter().map(|a| a.to_string()));
    parts.join(" ")
}
