//! CLI argument parsing

use clap::Parser;

use crate::config::{context, defaults, kubectl, notify, picker};
use crate::preflight::required_tools;

/// Kubernetes context switcher
#[derive(Parser, Debug)]
#[command(name = "kctx")]
#[command(version)]
#[command(about = "Switch between Kubernetes contexts interactively using fzf", long_about = None)]
#[command(after_help = "DESCRIPTION:\n  \
        - If a search term is given, contexts are filtered by it (case-insensitive).\n  \
        - The search term 'unset' unsets the current context.\n  \
        - If only one context matches, it is selected automatically.\n  \
        - Otherwise pick one interactively with fzf.\n\n\
        EXAMPLES:\n  \
        kctx                 # pick from all contexts\n  \
        kctx prod            # filter by 'prod'\n  \
        kctx unset           # unset the current context\n  \
        kctx --sketchybar    # trigger kubernetes_context_switch afterwards")]
pub struct Cli {
    /// Filter contexts by name, or `help` to show this message
    pub search_term: Option<String>,

    /// Send a sketchybar trigger (kubernetes_context_switch) after switching
    #[arg(long, default_value_t = false)]
    pub sketchybar: bool,

    /// kubectl binary
    #[arg(long, env = "KCTX_KUBECTL", default_value = kubectl::BINARY)]
    pub kubectl: String,

    /// Picker binary (fzf-compatible, reads candidates on stdin)
    #[arg(long, env = "KCTX_PICKER", default_value = picker::BINARY)]
    pub picker: String,

    /// Notifier binary used with --sketchybar
    #[arg(long, env = "KCTX_NOTIFIER", default_value = notify::BINARY)]
    pub notifier: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "KCTX_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Do not show the loading spinner
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Extra positionals after the search term are ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// `kctx help` was requested
    pub fn wants_help(&self) -> bool {
        self.search_term.as_deref() == Some(context::HELP_KEYWORD)
    }

    /// Search term, if any
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// Notifier binary when notifications are enabled
    pub fn notifier(&self) -> Option<&str> {
        self.sketchybar.then_some(self.notifier.as_str())
    }

    /// Executables that must be on PATH for this invocation
    pub fn required_tools(&self) -> Vec<&str> {
        required_tools(&self.kubectl, picker::FZF, &self.picker, self.notifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["kctx"]);
        assert!(cli.search_term.is_none());
        assert!(!cli.sketchybar);
        assert!(!cli.quiet);
        assert!(!cli.wants_help());
        assert!(cli.notifier().is_none());
    }

    #[test]
    fn test_cli_with_search_term() {
        let cli = Cli::parse_from(["kctx", "prod"]);
        assert_eq!(cli.search_term(), Some("prod"));
    }

    #[test]
    fn test_sketchybar_flag_after_term() {
        let cli = Cli::parse_from(["kctx", "prod", "--sketchybar"]);
        assert_eq!(cli.search_term(), Some("prod"));
        assert!(cli.sketchybar);
    }

    #[test]
    fn test_sketchybar_flag_before_term() {
        let cli = Cli::parse_from(["kctx", "--sketchybar", "dev"]);
        assert_eq!(cli.search_term(), Some("dev"));
        assert_eq!(cli.notifier(), Some(notify::BINARY));
    }

    #[test]
    fn test_help_keyword() {
        let cli = Cli::parse_from(["kctx", "help"]);
        assert!(cli.wants_help());
    }

    #[test]
    fn test_help_keyword_is_exact() {
        let cli = Cli::parse_from(["kctx", "helpdesk"]);
        assert!(!cli.wants_help());
    }

    #[test]
    fn test_extra_positionals_ignored() {
        let cli = Cli::parse_from(["kctx", "prod", "extra", "more"]);
        assert_eq!(cli.search_term(), Some("prod"));
        assert_eq!(cli.rest, vec!["extra", "more"]);
    }

    #[test]
    fn test_flag_between_positionals() {
        let cli = Cli::parse_from(["kctx", "staging", "--sketchybar", "x"]);
        assert_eq!(cli.search_term(), Some("staging"));
        assert!(cli.sketchybar);
    }

    #[test]
    fn test_unknown_flag_is_parse_error() {
        let err = Cli::try_parse_from(["kctx", "--unknown"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_help_flag_is_not_a_failure() {
        let err = Cli::try_parse_from(["kctx", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_binary_overrides() {
        let cli = Cli::parse_from(["kctx", "--kubectl", "/opt/kubectl", "--picker", "fzf"]);
        assert_eq!(cli.kubectl, "/opt/kubectl");
        assert_eq!(cli.picker, "fzf");
    }

    #[test]
    fn test_required_tools_without_notifier() {
        let cli = Cli::parse_from(["kctx", "--kubectl", "kubectl", "--picker", "fzf-tmux"]);
        assert_eq!(cli.required_tools(), vec!["kubectl", "fzf", "fzf-tmux"]);
    }

    #[test]
    fn test_required_tools_with_notifier() {
        let cli = Cli::parse_from([
            "kctx",
            "--sketchybar",
            "--kubectl",
            "kubectl",
            "--picker",
            "fzf",
            "--notifier",
            "sketchybar",
        ]);
        assert_eq!(cli.required_tools(), vec!["kubectl", "fzf", "sketchybar"]);
    }
}
