//! Candidate list construction and search filtering

use log::debug;

use crate::config::context::{SENTINEL_MIN_TERM_LEN, UNSET_KEYWORD, UNSET_SENTINEL};
use crate::error::{KctxError, Result};

/// Prepend the unset sentinel to the contexts, keeping their order
pub fn with_sentinel(contexts: Vec<String>) -> Vec<String> {
    let mut list = Vec::with_capacity(contexts.len() + 1);
    list.push(UNSET_SENTINEL.to_string());
    list.extend(contexts);
    list
}

/// Entries containing `term`, case-insensitively, in original order.
///
/// The sentinel matches terms containing `unset`, or terms of at least
/// [`SENTINEL_MIN_TERM_LEN`] characters found in its own text, so short
/// terms like `s` do not drag it into every result.
pub fn filter_contexts(contexts: &[String], term: &str) -> Vec<String> {
    let needle = term.to_lowercase();
    contexts
        .iter()
        .filter(|ctx| {
            if ctx.as_str() == UNSET_SENTINEL {
                sentinel_matches(&needle)
            } else {
                ctx.to_lowercase().contains(&needle)
            }
        })
        .cloned()
        .collect()
}

fn sentinel_matches(needle: &str) -> bool {
    needle.contains(UNSET_KEYWORD)
        || (needle.chars().count() >= SENTINEL_MIN_TERM_LEN
            && UNSET_SENTINEL.to_lowercase().contains(needle))
}

/// Narrow the candidate list by an optional search term.
///
/// An absent or empty term passes the list through untouched. A term that
/// matches nothing is an error.
pub fn apply_search(contexts: Vec<String>, term: Option<&str>) -> Result<Vec<String>> {
    let term = match term {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(contexts),
    };

    let filtered = filter_contexts(&contexts, term);
    debug!(
        "Search '{}' matched {} of {} entries",
        term,
        filtered.len(),
        contexts.len()
    );

    if filtered.is_empty() {
        return Err(KctxError::NoMatches(term.to_string()));
    }
    Ok(filtered)
}
