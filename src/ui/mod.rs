//! UI utilities for terminal interaction
//!
//! This module provides the interactive fuzzy picker and the progress
//! spinner shown while contexts are loaded.

mod picker;
mod spinner;

pub use picker::{select, FzfPicker, Picker};
pub use spinner::{create_spinner, finish_spinner};
