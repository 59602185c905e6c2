//! Switching workflow: list, filter, select, apply

use log::{debug, info};

use crate::context::{apply_search, with_sentinel, Outcome, Selection};
use crate::error::Result;
use crate::kube::ContextBackend;
use crate::notify::Notifier;
use crate::ui::{create_spinner, finish_spinner, select, Picker};

/// Drives one context switch against a backend and a picker
pub struct Switcher<B, P> {
    backend: B,
    picker: P,
    quiet: bool,
}

impl<B: ContextBackend, P: Picker> Switcher<B, P> {
    pub fn new(backend: B, picker: P) -> Self {
        Self {
            backend,
            picker,
            quiet: false,
        }
    }

    /// Suppress the loading spinner
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run the whole flow for an optional search term
    pub fn run(&self, term: Option<&str>) -> Result<Outcome> {
        let spinner = create_spinner("Loading contexts...", self.quiet);
        let listed = self.backend.list_contexts();
        finish_spinner(spinner);

        let candidates = apply_search(with_sentinel(listed?), term)?;
        debug!("{} candidate(s) after search", candidates.len());

        match select(&candidates, &self.picker)? {
            Some(choice) => self.handle_selection(Selection::from_choice(&choice)),
            None => {
                println!("No context selected");
                Ok(Outcome::Cancelled)
            }
        }
    }

    /// Apply a selection through the backend and confirm it
    pub fn handle_selection(&self, selection: Selection) -> Result<Outcome> {
        match &selection {
            Selection::Unset => {
                self.backend.unset_context()?;
                info!("Current context unset");
                println!("Current context unset.");
            }
            Selection::Switch(name) => {
                self.backend.use_context(name)?;
                info!("Switched to context '{}'", name);
                println!("Switched to context \"{}\".", name);
            }
        }
        Ok(selection.into())
    }
}

/// Notify only when kubeconfig actually changed
pub fn notify_on_change<N: Notifier + ?Sized>(outcome: &Outcome, notifier: Option<&N>) {
    if let Some(n) = notifier {
        if outcome.changed() {
            n.notify();
        }
    }
}
