//! Best-effort notification after the context changed

use std::process::{Command, Stdio};

use log::debug;

use crate::config::notify as notify_config;

/// Fire-and-forget notification sink
pub trait Notifier {
    /// Emit the notification. Failures are swallowed.
    fn notify(&self);
}

/// Triggers a sketchybar event so bar items can refresh
#[derive(Debug, Clone)]
pub struct Sketchybar {
    binary: String,
}

impl Default for Sketchybar {
    fn default() -> Self {
        Self::new(notify_config::BINARY)
    }
}

impl Sketchybar {
    /// Create a notifier for the given sketchybar binary (name or path)
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The notifier binary
    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Notifier for Sketchybar {
    fn notify(&self) {
        let result = Command::new(&self.binary)
            .args(["--trigger", notify_config::EVENT])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match result {
            Ok(status) if status.success() => debug!("Triggered {}", notify_config::EVENT),
            Ok(status) => debug!("Ignoring {} failure: {}", self.binary, status),
            Err(e) => debug!("Ignoring {} failure: {}", self.binary, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binary() {
        assert_eq!(Sketchybar::default().binary(), "sketchybar");
    }

    #[test]
    fn test_missing_binary_is_silent() {
        // Should not panic
        Sketchybar::new("kctx-no-such-notifier-xyz").notify();
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_binary_is_silent() {
        Sketchybar::new("false").notify();
    }
}
