//! `kubectl config` backend

use log::{debug, warn};

use crate::config::kubectl as kubectl_config;
use crate::error::Result;

use super::runner::run_captured;
use super::ContextBackend;

/// Backend driving a kubectl binary
#[derive(Debug, Clone)]
pub struct Kubectl {
    binary: String,
}

impl Default for Kubectl {
    fn default() -> Self {
        Self::new(kubectl_config::BINARY)
    }
}

impl Kubectl {
    /// Create a backend for the given kubectl binary (name or path)
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The kubectl binary this backend invokes
    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl ContextBackend for Kubectl {
    fn list_contexts(&self) -> Result<Vec<String>> {
        let output = run_captured(&self.binary, kubectl_config::LIST_ARGS, "getting contexts")?;
        let contexts = parse_context_output(&output.stdout);
        debug!("kubectl reported {} contexts", contexts.len());
        Ok(contexts)
    }

    fn use_context(&self, name: &str) -> Result<()> {
        let mut args: Vec<&str> = kubectl_config::USE_ARGS.to_vec();
        args.push(name);
        run_captured(&self.binary, &args, "switching context")?;
        Ok(())
    }

    fn unset_context(&self) -> Result<()> {
        run_captured(&self.binary, kubectl_config::UNSET_ARGS, "unsetting context")?;
        Ok(())
    }
}

/// Split `get-contexts -o name` output into context names.
///
/// Keeps kubectl's order and drops blank lines. Lines that are not valid
/// UTF-8 are skipped: a lossy name would not round-trip to `use-context`.
pub fn parse_context_output(stdout: &[u8]) -> Vec<String> {
    stdout
        .split(|b| *b == b'\n')
        .filter_map(|line| match std::str::from_utf8(line) {
            Ok(name) => Some(name.trim_end()),
            Err(e) => {
                warn!(
                    "Skipping context name that is not valid UTF-8 ({}): {}",
                    e,
                    String::from_utf8_lossy(line).trim_end()
                );
                None
            }
        })
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .collect()
}
