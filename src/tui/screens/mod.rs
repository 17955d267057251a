//! TUI screen implementations.

pub mod entry_form;

pub use entry_form::{EntryFormState, Focus, draw_entry_form};
