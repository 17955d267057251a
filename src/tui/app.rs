use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};
use tracing::{debug, error, info};

use crate::model::{Command, FormEvent, FormState};
use crate::service::{Dispatcher, Resolution};

use super::action::Action;
use super::error::AppError;
use super::screens::{EntryFormState, draw_entry_form};

/// How long to wait for terminal input before checking for service results.
const TICK: Duration = Duration::from_millis(50);

/// Top-level application state.
pub struct App {
    form: FormState,
    screen: EntryFormState,
    dispatcher: Dispatcher,
    should_quit: bool,
}

impl App {
    /// Creates the app and requests the location list.
    pub fn new(dispatcher: Dispatcher) -> Self {
        info!("requesting location options");
        dispatcher.fetch_locations();
        Self {
            form: FormState::new(),
            screen: EntryFormState::new(),
            dispatcher,
            should_quit: false,
        }
    }

    /// Main event loop: draw → apply service results → poll input → dispatch.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.drain_resolutions();
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }
        info!(entries = self.form.entries().len(), "quitting");
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&mut self, frame: &mut Frame) {
        draw_entry_form(&mut self.screen, &self.form, frame, frame.area());
    }

    /// Applies every service result that has arrived so far.
    pub fn drain_resolutions(&mut self) {
        while let Some(resolution) = self.dispatcher.try_next() {
            self.apply_resolution(resolution);
        }
    }

    /// Applies one service result. Failures are logged and otherwise ignored.
    pub fn apply_resolution(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Locations(Ok(options)) => {
                info!(count = options.len(), "location options loaded");
                self.update(FormEvent::LocationsLoaded(options));
            }
            Resolution::Locations(Err(e)) => {
                error!("error fetching location options: {e}");
            }
            Resolution::NameValidity {
                ticket,
                result: Ok(valid),
            } => {
                self.update(FormEvent::NameValidated { ticket, valid });
            }
            Resolution::NameValidity {
                ticket,
                result: Err(e),
            } => {
                error!(name = ticket.name(), "error checking name availability: {e}");
            }
        }
    }

    /// Handles a key press by routing it through the screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.screen.handle_key(key, &self.form) {
            Action::None => {}
            Action::Form(event) => self.update(event),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Runs the reducer and executes the command it returns.
    ///
    /// The table follows a newly added entry and scrolls back to the top
    /// when the entries are cleared.
    fn update(&mut self, event: FormEvent) {
        let before = self.form.entries().len();
        let (form, command) = std::mem::take(&mut self.form).reduce(event);
        self.form = form;
        let after = self.form.entries().len();
        if after > before {
            self.screen.follow_newest(after);
        } else if after < before {
            self.screen.reset_table();
        }
        match command {
            Command::None => {}
            Command::ValidateName(ticket) => {
                debug!(seq = ticket.seq(), "validating name");
                self.dispatcher.validate_name(ticket);
            }
            Command::Alert(message) => self.screen.show_alert(message),
        }
    }

    /// Returns the form state.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Returns the screen state.
    pub fn screen(&self) -> &EntryFormState {
        &self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
