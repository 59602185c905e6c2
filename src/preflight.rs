//! Dependency checks run before anything is spawned

use log::debug;

use crate::error::{KctxError, Result};

/// Fail on the first tool that cannot be resolved on PATH
pub fn check_dependencies(tools: &[&str]) -> Result<()> {
    for tool in tools {
        match which::which(tool) {
            Ok(path) => debug!("Found {} at {}", tool, path.display()),
            Err(_) => return Err(KctxError::MissingDependency(tool.to_string())),
        }
    }
    Ok(())
}

/// Tools a run needs, in check order, without duplicates
pub fn required_tools<'a>(
    kubectl: &'a str,
    fzf: &'a str,
    picker: &'a str,
    notifier: Option<&'a str>,
) -> Vec<&'a str> {
    let mut tools = Vec::with_capacity(4);
    for tool in [Some(kubectl), Some(fzf), Some(picker), notifier]
        .into_iter()
        .flatten()
    {
        if !tools.contains(&tool) {
            tools.push(tool);
        }
    }
    tools
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_tools_order() {
        assert_eq!(
            required_tools("kubectl", "fzf", "fzf-tmux", None),
            vec!["kubectl", "fzf", "fzf-tmux"]
        );
    }

    #[test]
    fn test_required_tools_dedup() {
        assert_eq!(
            required_tools("kubectl", "fzf", "fzf", Some("sketchybar")),
            vec!["kubectl", "fzf", "sketchybar"]
        );
    }

    #[test]
    fn test_missing_dependency_named() {
        let err = check_dependencies(&["kctx-no-such-tool-xyz"]).unwrap_err();
        match err {
            KctxError::MissingDependency(tool) => assert_eq!(tool, "kctx-no-such-tool-xyz"),
            _ => panic!("Expected KctxError::MissingDependency"),
        }
    }

    #[test]
    fn test_empty_list_ok() {
        assert!(check_dependencies(&[]).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_present_dependency() {
        assert!(check_dependencies(&["sh"]).is_ok());
    }
}
