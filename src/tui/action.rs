//! Actions returned by screen event handlers.

use crate::model::FormEvent;

/// An action that a screen handler returns to the [`App`](super::App).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Feed an event to the form reducer.
    Form(FormEvent),
    /// Quit the application.
    Quit,
}
