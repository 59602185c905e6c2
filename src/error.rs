use std::fmt;

/// Custom error type for context switching
#[derive(Debug)]
pub enum KctxError {
    /// Required executable not found on PATH
    MissingDependency(String),
    /// External command failed to spawn or exited non-zero
    Command { action: String, message: String },
    /// Search term matched no context
    NoMatches(String),
    /// Interactive picker failed (cancellation is not an error)
    Picker(String),
}

impl fmt::Display for KctxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KctxError::MissingDependency(tool) => write!(
                f,
                "{} could not be found. Please install {} to use this tool.",
                tool, tool
            ),
            KctxError::Command { action, message } => {
                write!(f, "Error {}: {}", action, message)
            }
            KctxError::NoMatches(term) => write!(f, "No contexts found matching \"{}\"", term),
            KctxError::Picker(msg) => write!(f, "Error selecting context: {}", msg),
        }
    }
}

impl std::error::Error for KctxError {}

impl From<std::io::Error> for KctxError {
    fn from(err: std::io::Error) -> Self {
        KctxError::Command {
            action: "running command".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for context switching
pub type Result<T> = std::result::Result<T, KctxError>;
