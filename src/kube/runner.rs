//! Blocking subprocess helpers

use std::process::{Command, Output};

use log::debug;

use crate::error::{KctxError, Result};

/// Run a command to completion, capturing stdout and stderr.
///
/// Spawn failures and non-zero exits both become [`KctxError::Command`]
/// tagged with `action` (e.g. "getting contexts").
pub fn run_captured(program: &str, args: &[&str], action: &str) -> Result<Output> {
    debug!("Running {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| KctxError::Command {
            action: action.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(KctxError::Command {
            action: action.to_string(),
            message: describe_failure(&output),
        });
    }

    Ok(output)
}

/// Human-readable failure text: stderr when present, otherwise the exit status
pub fn describe_failure(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        output.status.to_string()
    } else {
        format!("{} ({})", stderr, output.status)
    }
}
