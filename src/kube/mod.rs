//! kubectl integration
//!
//! The switcher talks to kubeconfig only through [`ContextBackend`]; the
//! production implementation shells out to `kubectl config`.

mod kubectl;
mod runner;

pub use kubectl::{parse_context_output, Kubectl};
pub use runner::{describe_failure, run_captured};

use crate::error::Result;

/// Source of truth for kubeconfig contexts
pub trait ContextBackend {
    /// Context names in the order kubectl reports them
    fn list_contexts(&self) -> Result<Vec<String>>;

    /// Make `name` the current context
    fn use_context(&self, name: &str) -> Result<()>;

    /// Clear the current context
    fn unset_context(&self) -> Result<()>;
}
