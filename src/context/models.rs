//! Selection and outcome models

use crate::config::context::UNSET_SENTINEL;

/// What the user chose from the candidate list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The sentinel entry: clear the current context
    Unset,
    /// A named context to switch to
    Switch(String),
}

impl Selection {
    /// Map a chosen line to a selection. Only an exact sentinel match unsets.
    pub fn from_choice(choice: &str) -> Self {
        if choice == UNSET_SENTINEL {
            Selection::Unset
        } else {
            Selection::Switch(choice.to_string())
        }
    }
}

/// Result of a complete run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Current context was unset
    Unset,
    /// Switched to the named context
    Switched(String),
    /// Picker was dismissed, nothing changed
    Cancelled,
}

impl Outcome {
    /// Whether kubectl state was modified
    pub fn changed(&self) -> bool {
        !matches!(self, Outcome::Cancelled)
    }
}

impl From<Selection> for Outcome {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Unset => Outcome::Unset,
            Selection::Switch(name) => Outcome::Switched(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_maps_to_unset() {
        assert_eq!(Selection::from_choice(UNSET_SENTINEL), Selection::Unset);
    }

    #[test]
    fn test_name_maps_to_switch_verbatim() {
        assert_eq!(
            Selection::from_choice("arn:aws:eks:eu-west-1:123:cluster/prod"),
            Selection::Switch("arn:aws:eks:eu-west-1:123:cluster/prod".to_string())
        );
    }

    #[test]
    fn test_sentinel_lookalike_is_a_switch() {
        assert_eq!(
            Selection::from_choice("- unset context -"),
            Selection::Switch("- unset context -".to_string())
        );
    }

    #[test]
    fn test_outcome_changed() {
        assert!(Outcome::Unset.changed());
        assert!(Outcome::Switched("dev".to_string()).changed());
        assert!(!Outcome::Cancelled.changed());
    }

    #[test]
    fn test_outcome_from_selection() {
        assert_eq!(Outcome::from(Selection::Unset), Outcome::Unset);
        assert_eq!(
            Outcome::from(Selection::Switch("prod".to_string())),
            Outcome::Switched("prod".to_string())
        );
    }
}
