//! Form controller state and its reducer.
//!
//! All mutation goes through [`FormState::reduce`], which consumes the
//! current state and returns the next one together with a [`Command`] for
//! the runtime to execute. Asynchronous results re-enter as events.

use tracing::debug;

use super::entry::{Entry, name_taken};
use super::validation::{NameError, REQUIRED_FIELDS_MESSAGE, check_required};

/// Identifies a single name-validation request.
///
/// Only the most recently issued ticket is honoured when results come back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationTicket {
    seq: u64,
    name: String,
}

impl ValidationTicket {
    /// The name submitted for validation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The request sequence number.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Inputs to the reducer: user intents and service resolutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The location service returned the selectable options.
    LocationsLoaded(Vec<String>),
    /// The name text changed.
    NameChanged(String),
    /// The name validator answered the request identified by `ticket`.
    NameValidated {
        ticket: ValidationTicket,
        valid: bool,
    },
    /// A location option was picked.
    LocationSelected(String),
    /// Append the current name/location to the table.
    Add,
    /// Reset the form and empty the table.
    Clear,
}

/// A side effect requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing to do.
    None,
    /// Ask the name validator about `ticket.name()`.
    ValidateName(ValidationTicket),
    /// Show a blocking alert with the given message.
    Alert(&'static str),
}

/// State owned by the form controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    name: String,
    location: String,
    name_error: Option<NameError>,
    entries: Vec<Entry>,
    /// `None` until the first successful load.
    location_options: Option<Vec<String>>,
    validation_seq: u64,
}

impl FormState {
    /// Creates an empty form with no location options loaded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `event`, returning the next state and the command to run.
    pub fn reduce(mut self, event: FormEvent) -> (Self, Command) {
        let command = match event {
            FormEvent::LocationsLoaded(options) => {
                self.load_locations(options);
                Command::None
            }
            FormEvent::NameChanged(text) => self.change_name(text),
            FormEvent::NameValidated { ticket, valid } => {
                self.resolve_validation(&ticket, valid);
                Command::None
            }
            FormEvent::LocationSelected(value) => {
                self.select_location(value);
                Command::None
            }
            FormEvent::Add => self.add(),
            FormEvent::Clear => {
                self.clear();
                Command::None
            }
        };
        (self, command)
    }

    /// Current name text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current location selection; empty when nothing is selected.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Current inline name error, if any.
    pub fn name_error(&self) -> Option<NameError> {
        self.name_error
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Selectable locations; empty until loaded.
    pub fn location_options(&self) -> &[String] {
        self.location_options.as_deref().unwrap_or(&[])
    }

    /// Sequence number of the most recently issued validation request.
    pub fn validation_seq(&self) -> u64 {
        self.validation_seq
    }

    fn first_location(&self) -> String {
        self.location_options().first().cloned().unwrap_or_default()
    }

    fn load_locations(&mut self, options: Vec<String>) {
        if self.location_options.is_some() {
            debug!("location options already loaded, ignoring reload");
            return;
        }
        self.location = options.first().cloned().unwrap_or_default();
        self.location_options = Some(options);
    }

    fn change_name(&mut self, text: String) -> Command {
        self.name = text;
        self.validation_seq += 1;
        Command::ValidateName(ValidationTicket {
            seq: self.validation_seq,
            name: self.name.clone(),
        })
    }

    fn resolve_validation(&mut self, ticket: &ValidationTicket, valid: bool) {
        if ticket.seq != self.validation_seq {
            debug!(
                seq = ticket.seq,
                latest = self.validation_seq,
                "discarding stale name validation"
            );
            return;
        }
        self.name_error = if !valid {
            Some(NameError::Invalid)
        } else if name_taken(&self.entries, &ticket.name) {
            Some(NameError::Taken)
        } else {
            None
        };
    }

    fn select_location(&mut self, value: String) {
        if self.location_options().contains(&value) {
            self.location = value;
        } else {
            debug!(location = %value, "ignoring unknown location");
        }
    }

    fn add(&mut self) -> Command {
        if let Err(missing) = check_required(&self.name, &self.location) {
            debug!(%missing, "add rejected");
            return Command::Alert(REQUIRED_FIELDS_MESSAGE);
        }
        if name_taken(&self.entries, &self.name) {
            self.name_error = Some(NameError::Taken);
            return Command::None;
        }
        let name = std::mem::take(&mut self.name);
        let location = self.first_location();
        let location = std::mem::replace(&mut self.location, location);
        self.entries.push(Entry::new(name, location));
        self.name_error = None;
        self.invalidate_validations();
        Command::None
    }

    fn clear(&mut self) {
        self.name.clear();
        self.location = self.first_location();
        self.entries.clear();
        self.name_error = None;
        self.invalidate_validations();
    }

    // Results for requests issued before this point no longer match the field.
    fn invalidate_validations(&mut self) {
        self.validation_seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn loaded(options: &[&str]) -> FormState {
        let options = options.iter().map(|s| s.to_string()).collect();
        FormState::new().reduce(FormEvent::LocationsLoaded(options)).0
    }

    fn apply(state: FormState, event: FormEvent) -> FormState {
        state.reduce(event).0
    }

    fn type_name(state: FormState, name: &str) -> (FormState, ValidationTicket) {
        match state.reduce(FormEvent::NameChanged(name.into())) {
            (next, Command::ValidateName(ticket)) => (next, ticket),
            (_, other) => panic!("expected ValidateName, got {other:?}"),
        }
    }

    fn add_entry(state: FormState, name: &str) -> FormState {
        let (state, _) = type_name(state, name);
        apply(state, FormEvent::Add)
    }

    fn names(state: &FormState) -> Vec<&str> {
        state.entries().iter().map(Entry::name).collect()
    }

    mod locations {
        use super::*;

        #[test]
        fn new_has_no_options_and_no_location() {
            let state = FormState::new();
            assert!(state.location_options().is_empty());
            assert_eq!(state.location(), "");
        }

        #[test]
        fn load_selects_first_option() {
            let state = loaded(&["NYC", "LA"]);
            assert_eq!(state.location_options(), ["NYC", "LA"]);
            assert_eq!(state.location(), "NYC");
        }

        #[test]
        fn load_empty_list_leaves_location_unset() {
            let state = loaded(&[]);
            assert_eq!(state.location(), "");
        }

        #[test]
        fn second_load_is_ignored() {
            let state = loaded(&["NYC", "LA"]);
            let state = apply(state, FormEvent::LocationsLoaded(vec!["Paris".into()]));
            assert_eq!(state.location_options(), ["NYC", "LA"]);
            assert_eq!(state.location(), "NYC");
        }

        #[test]
        fn select_known_location() {
            let state = apply(loaded(&["NYC", "LA"]), FormEvent::LocationSelected("LA".into()));
            assert_eq!(state.location(), "LA");
        }

        #[test]
        fn select_unknown_location_is_ignored() {
            let state = apply(
                loaded(&["NYC", "LA"]),
                FormEvent::LocationSelected("Paris".into()),
            );
            assert_eq!(state.location(), "NYC");
        }

        #[test]
        fn select_before_load_is_ignored() {
            let state = apply(FormState::new(), FormEvent::LocationSelected("LA".into()));
            assert_eq!(state.location(), "");
        }
    }

    mod name_change {
        use super::*;

        #[test]
        fn sets_name_and_requests_validation() {
            let (state, ticket) = type_name(loaded(&["NYC"]), "Al");
            assert_eq!(state.name(), "Al");
            assert_eq!(ticket.name(), "Al");
            assert_eq!(ticket.seq(), state.validation_seq());
        }

        #[test]
        fn leaves_error_until_resolved() {
            let (state, ticket) = type_name(loaded(&["NYC"]), "bad");
            let state = apply(state, FormEvent::NameValidated { ticket, valid: false });
            let (state, _) = type_name(state, "good");
            assert_eq!(state.name_error(), Some(NameError::Invalid));
        }

        #[test]
        fn invalid_resolution_sets_invalid() {
            let (state, ticket) = type_name(loaded(&["NYC"]), "invalid name");
            let state = apply(state, FormEvent::NameValidated { ticket, valid: false });
            assert_eq!(state.name_error(), Some(NameError::Invalid));
        }

        #[test]
        fn valid_resolution_clears_error() {
            let (state, ticket) = type_name(loaded(&["NYC"]), "x");
            let state = apply(state, FormEvent::NameValidated { ticket, valid: false });
            let (state, ticket) = type_name(state, "Al");
            let state = apply(state, FormEvent::NameValidated { ticket, valid: true });
            assert_eq!(state.name_error(), None);
        }

        #[test]
        fn valid_but_taken_sets_taken() {
            let state = add_entry(loaded(&["NYC"]), "Bob");
            let (state, ticket) = type_name(state, "BOB");
            let state = apply(state, FormEvent::NameValidated { ticket, valid: true });
            assert_eq!(state.name_error(), Some(NameError::Taken));
        }

        #[test]
        fn invalid_wins_over_taken() {
            let state = add_entry(loaded(&["NYC"]), "Bob");
            let (state, ticket) = type_name(state, "bob");
            let state = apply(state, FormEvent::NameValidated { ticket, valid: false });
            assert_eq!(state.name_error(), Some(NameError::Invalid));
        }

        #[test]
        fn stale_resolution_is_discarded() {
            let (state, first) = type_name(loaded(&["NYC"]), "A");
            let (state, second) = type_name(state, "Al");
            let state = apply(
                state,
                FormEvent::NameValidated {
                    ticket: second,
                    valid: true,
                },
            );
            let state = apply(
                state,
                FormEvent::NameValidated {
                    ticket: first,
                    valid: false,
                },
            );
            assert_eq!(state.name_error(), None);
        }

        #[test]
        fn resolution_after_add_is_discarded() {
            let (state, ticket) = type_name(loaded(&["NYC"]), "Al");
            let state = apply(state, FormEvent::Add);
            let state = apply(state, FormEvent::NameValidated { ticket, valid: true });
            assert_eq!(state.name_error(), None);
        }

        #[test]
        fn resolution_after_clear_is_discarded() {
            let (state, ticket) = type_name(loaded(&["NYC"]), "bad");
            let state = apply(state, FormEvent::Clear);
            let state = apply(state, FormEvent::NameValidated { ticket, valid: false });
            assert_eq!(state.name_error(), None);
        }
    }

    mod add {
        use super::*;

        #[test]
        fn appends_and_resets_fields() {
            let state = loaded(&["NYC", "LA"]);
            let state = apply(state, FormEvent::LocationSelected("LA".into()));
            let state = add_entry(state, "Al");
            assert_eq!(state.entries(), [Entry::new("Al", "LA")]);
            assert_eq!(state.name(), "");
            assert_eq!(state.location(), "NYC");
            assert_eq!(state.name_error(), None);
        }

        #[test]
        fn keeps_name_as_typed() {
            let state = add_entry(loaded(&["NYC"]), "  Al ");
            assert_eq!(names(&state), ["  Al "]);
        }

        #[test]
        fn whitespace_name_alerts_without_mutation() {
            let (state, _) = type_name(loaded(&["NYC"]), "   ");
            let before = state.clone();
            let (after, command) = state.reduce(FormEvent::Add);
            assert_eq!(command, Command::Alert(REQUIRED_FIELDS_MESSAGE));
            assert_eq!(after, before);
        }

        #[test]
        fn missing_location_alerts() {
            let (state, _) = type_name(FormState::new(), "Al");
            let (state, command) = state.reduce(FormEvent::Add);
            assert_eq!(command, Command::Alert(REQUIRED_FIELDS_MESSAGE));
            assert!(state.entries().is_empty());
            assert_eq!(state.name(), "Al");
        }

        #[test]
        fn duplicate_ignoring_case_is_rejected() {
            let state = add_entry(loaded(&["NYC"]), "Bob");
            let (state, _) = type_name(state, "bob");
            let (state, command) = state.reduce(FormEvent::Add);
            assert_eq!(command, Command::None);
            assert_eq!(state.entries().len(), 1);
            assert_eq!(state.name_error(), Some(NameError::Taken));
            assert_eq!(state.name(), "bob");
        }

        #[test]
        fn preserves_insertion_order() {
            let state = loaded(&["NYC"]);
            let state = add_entry(state, "c");
            let state = add_entry(state, "a");
            let state = add_entry(state, "b");
            assert_eq!(names(&state), ["c", "a", "b"]);
        }

        #[test]
        fn scenario_nyc_la() {
            let state = loaded(&["NYC", "LA"]);
            assert_eq!(state.location(), "NYC");
            let (state, ticket) = type_name(state, "Al");
            let state = apply(state, FormEvent::NameValidated { ticket, valid: true });
            assert_eq!(state.name_error(), None);
            let state = apply(state, FormEvent::Add);
            assert_eq!(state.entries(), [Entry::new("Al", "NYC")]);
            assert_eq!(state.name(), "");
            assert_eq!(state.location(), "NYC");
        }

        #[quickcheck]
        fn distinct_names_all_added_in_order(candidates: Vec<String>) -> bool {
            let mut expected: Vec<String> = Vec::new();
            for name in &candidates {
                let taken = expected
                    .iter()
                    .any(|e| e.to_uppercase() == name.to_uppercase());
                if !name.trim().is_empty() && !taken {
                    expected.push(name.clone());
                }
            }
            let state = candidates
                .iter()
                .fold(loaded(&["NYC"]), |state, name| add_entry(state, name));
            names(&state) == expected
        }
    }

    mod clear {
        use super::*;

        #[test]
        fn resets_everything() {
            let state = loaded(&["NYC", "LA"]);
            let state = add_entry(state, "Al");
            let state = add_entry(state, "Al");
            assert_eq!(state.name_error(), Some(NameError::Taken));
            let state = apply(state, FormEvent::LocationSelected("LA".into()));
            let (state, command) = state.reduce(FormEvent::Clear);
            assert_eq!(command, Command::None);
            assert!(state.entries().is_empty());
            assert_eq!(state.name(), "");
            assert_eq!(state.location(), "NYC");
            assert_eq!(state.name_error(), None);
        }

        #[test]
        fn keeps_location_options() {
            let state = apply(loaded(&["NYC", "LA"]), FormEvent::Clear);
            assert_eq!(state.location_options(), ["NYC", "LA"]);
        }

        #[test]
        fn without_options_leaves_location_empty() {
            let (state, _) = type_name(FormState::new(), "Al");
            let state = apply(state, FormEvent::Clear);
            assert_eq!(state.location(), "");
            assert_eq!(state.name(), "");
        }

        #[test]
        fn is_idempotent() {
            let once = apply(add_entry(loaded(&["NYC"]), "Al"), FormEvent::Clear);
            let twice = apply(once.clone(), FormEvent::Clear);
            assert_eq!(once.entries(), twice.entries());
            assert_eq!(once.name(), twice.name());
            assert_eq!(once.location(), twice.location());
        }
    }
}
