//! kctx - Switch Kubernetes contexts interactively
//!
//! Lists kubeconfig contexts through `kubectl`, narrows them by an optional
//! search term and applies the choice, prompting with fzf when more than one
//! candidate remains.
//!
//! # Example
//!
//! ```bash
//! # Pick from all contexts
//! kctx
//!
//! # Switch straight to the only context matching "staging"
//! kctx staging
//!
//! # Unset the current context
//! kctx unset
//!
//! # Notify sketchybar after switching
//! kctx --sketchybar
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod kube;
pub mod notify;
pub mod preflight;
pub mod ui;

pub use app::{notify_on_change, Switcher};
pub use cli::Cli;
pub use context::{apply_search, filter_contexts, with_sentinel, Outcome, Selection};
pub use error::{KctxError, Result};
pub use kube::{ContextBackend, Kubectl};
pub use notify::{Notifier, Sketchybar};
pub use preflight::check_dependencies;
pub use ui::{FzfPicker, Picker};
