//! Interactive context picker backed by fzf

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use log::debug;

use crate::config::picker as picker_config;
use crate::error::{KctxError, Result};
use crate::kube::describe_failure;

/// Lets the user choose one line out of many
pub trait Picker {
    /// Returns `Ok(None)` when the user dismissed the picker
    fn pick(&self, candidates: &[String]) -> Result<Option<String>>;
}

/// Pick from the candidates, skipping the picker when there is nothing to ask
pub fn select<P: Picker + ?Sized>(candidates: &[String], picker: &P) -> Result<Option<String>> {
    match candidates {
        [] => Ok(None),
        [only] => {
            debug!("Single candidate '{}', skipping picker", only);
            Ok(Some(only.clone()))
        }
        _ => picker.pick(candidates),
    }
}

/// fzf (or fzf-tmux) reading candidates on stdin
#[derive(Debug, Clone)]
pub struct FzfPicker {
    binary: String,
}

impl Default for FzfPicker {
    fn default() -> Self {
        Self::new(picker_config::BINARY)
    }
}

impl FzfPicker {
    /// Create a picker for the given binary (name or path)
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The picker binary
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Arguments for a popup sized to the candidate list
    pub fn args(candidate_count: usize) -> Vec<String> {
        vec![
            "-p".to_string(),
            "-h".to_string(),
            (candidate_count + picker_config::HEIGHT_PADDING).to_string(),
            "--info".to_string(),
            "hidden".to_string(),
            format!("--border-label={}", picker_config::BORDER_LABEL),
        ]
    }
}

impl Picker for FzfPicker {
    fn pick(&self, candidates: &[String]) -> Result<Option<String>> {
        let args = Self::args(candidates.len());
        debug!("Running {} {}", self.binary, args.join(" "));

        let mut child = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| KctxError::Picker(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            // The picker may exit before consuming everything
            if let Err(e) = stdin.write_all(candidates.join("\n").as_bytes()) {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(KctxError::Picker(e.to_string()));
                }
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| KctxError::Picker(e.to_string()))?;

        if output.status.code() == Some(picker_config::CANCEL_EXIT_CODE) {
            debug!("Picker cancelled");
            return Ok(None);
        }
        if !output.status.success() {
            return Err(KctxError::Picker(describe_failure(&output)));
        }

        let choice = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if choice.is_empty() {
            Ok(None)
        } else {
            Ok(Some(choice))
        }
    }
}
