/// Configuration constants for the kubectl backend
pub mod kubectl {
    /// Default kubectl binary
    pub const BINARY: &str = "kubectl";

    /// Arguments listing context names, one per line
    pub const LIST_ARGS: &[&str] = &["config", "get-contexts", "-o", "name"];

    /// Arguments preceding the context name when switching
    pub const USE_ARGS: &[&str] = &["config", "use-context"];

    /// Arguments clearing the current context
    pub const UNSET_ARGS: &[&str] = &["config", "unset", "current-context"];
}

/// Configuration constants for the interactive picker
pub mod picker {
    /// Default picker binary (fzf in a tmux popup)
    pub const BINARY: &str = "fzf-tmux";

    /// fzf itself must be installed even when a wrapper is used
    pub const FZF: &str = "fzf";

    /// Popup height is the candidate count plus this padding
    pub const HEIGHT_PADDING: usize = 5;

    /// Border label shown around the picker
    pub const BORDER_LABEL: &str = " Kubernetes Contexts ";

    /// Exit status fzf reports on Ctrl-C / Esc
    pub const CANCEL_EXIT_CODE: i32 = 130;
}

/// Configuration constants for the post-switch notification
pub mod notify {
    /// Default notifier binary
    pub const BINARY: &str = "sketchybar";

    /// Event triggered after the context changed
    pub const EVENT: &str = "kubernetes_context_switch";
}

/// Context list constants
pub mod context {
    /// Synthetic entry that clears the current context
    pub const UNSET_SENTINEL: &str = "- Unset Context -";

    /// Search term selecting the sentinel
    pub const UNSET_KEYWORD: &str = "unset";

    /// Shortest term matched against the sentinel's own text
    pub const SENTINEL_MIN_TERM_LEN: usize = 4;

    /// Positional keyword printing usage instead of filtering
    pub const HELP_KEYWORD: &str = "help";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

