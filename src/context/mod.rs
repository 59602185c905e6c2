//! Context list handling
//!
//! Builds the candidate list shown to the user (sentinel first, then the
//! contexts in kubectl order), narrows it by a search term and maps the final
//! choice to a [`Selection`].

mod filter;
mod models;

pub use filter::{apply_search, filter_contexts, with_sentinel};
pub use models::{Outcome, Selection};
