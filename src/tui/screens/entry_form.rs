//! Entry form screen: name input, location select, Clear/Add buttons and
//! the scrollable entries table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, TableState};

use crate::model::{FormEvent, FormState};
use crate::tui::action::Action;
use crate::tui::widgets::{
    Select, TEXT_FIELD_HEIGHT, TextField, cycle_option, draw_alert, draw_entry_table,
    draw_select, draw_text_field,
};

/// Placeholder shown in the location select while nothing is selected.
pub const LOCATION_PLACEHOLDER: &str = "Select location";

/// Rows moved by PageUp/PageDown in the entries table.
const TABLE_PAGE: usize = 5;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Location,
    Clear,
    Add,
    Table,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Name,
        Focus::Location,
        Focus::Clear,
        Focus::Add,
        Focus::Table,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// UI-only state for the entry form screen.
///
/// The form data itself lives in [`FormState`], owned by the app.
#[derive(Debug, Clone, Default)]
pub struct EntryFormState {
    focus: Focus,
    alert: Option<&'static str>,
    /// Selected entry and scroll offset of the table.
    table: TableState,
}

impl EntryFormState {
    /// Creates the screen with focus on the name field and no alert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key event against the current form, returning an
    /// [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent, form: &FormState) -> Action {
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.alert = None;
            }
            return Action::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            _ => match self.focus {
                Focus::Name => self.handle_name_key(key.code, form),
                Focus::Location => self.handle_location_key(key.code, form),
                Focus::Clear => press_button(key.code, FormEvent::Clear),
                Focus::Add => press_button(key.code, FormEvent::Add),
                Focus::Table => {
                    self.handle_table_key(key.code, form.entries().len());
                    Action::None
                }
            },
        }
    }

    /// Returns the focused control.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Moves focus to `focus`.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// Returns the alert message, if one is showing.
    pub fn alert(&self) -> Option<&'static str> {
        self.alert
    }

    /// Shows a blocking alert until the user dismisses it.
    pub fn show_alert(&mut self, message: &'static str) {
        self.alert = Some(message);
    }

    /// Returns the selected table row, if any.
    pub fn selected_row(&self) -> Option<usize> {
        self.table.selected()
    }

    /// Selects the newest of `count` entries so it is scrolled into view.
    pub fn follow_newest(&mut self, count: usize) {
        self.table.select(count.checked_sub(1));
    }

    /// Drops the table selection and scrolls back to the top.
    pub fn reset_table(&mut self) {
        self.table = TableState::default();
    }

    fn handle_table_key(&mut self, code: KeyCode, count: usize) {
        let Some(last) = count.checked_sub(1) else {
            return;
        };
        let current = self.table.selected().unwrap_or(0).min(last);
        let next = match code {
            KeyCode::Up => current.saturating_sub(1),
            KeyCode::Down => (current + 1).min(last),
            KeyCode::PageUp => current.saturating_sub(TABLE_PAGE),
            KeyCode::PageDown => (current + TABLE_PAGE).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => return,
        };
        self.table.select(Some(next));
    }

    fn handle_name_key(&mut self, code: KeyCode, form: &FormState) -> Action {
        match code {
            KeyCode::Char(ch) => {
                let mut name = form.name().to_string();
                name.push(ch);
                Action::Form(FormEvent::NameChanged(name))
            }
            KeyCode::Backspace => {
                let mut name = form.name().to_string();
                match name.pop() {
                    Some(_) => Action::Form(FormEvent::NameChanged(name)),
                    None => Action::None,
                }
            }
            KeyCode::Enter => Action::Form(FormEvent::Add),
            _ => Action::None,
        }
    }

    fn handle_location_key(&mut self, code: KeyCode, form: &FormState) -> Action {
        let forward = match code {
            KeyCode::Right | KeyCode::Down => true,
            KeyCode::Left | KeyCode::Up => false,
            KeyCode::Enter => return Action::Form(FormEvent::Add),
            _ => return Action::None,
        };
        match cycle_option(form.location_options(), form.location(), forward) {
            Some(next) if next != form.location() => {
                Action::Form(FormEvent::LocationSelected(next.to_string()))
            }
            _ => Action::None,
        }
    }
}

fn press_button(code: KeyCode, event: FormEvent) -> Action {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') => Action::Form(event),
        _ => Action::None,
    }
}

fn button(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("[ {label} ]"), style)
}

/// Renders the entry form screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_entry_form(
    state: &mut EntryFormState,
    form: &FormState,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" roster ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name_area, location_area, buttons_area, _gap, table_area, footer_area] =
        Layout::vertical([
            Constraint::Length(TEXT_FIELD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let error = form.name_error().map(|e| e.to_string());
    let name = TextField {
        placeholder: "mock name",
        error: error.as_deref(),
        required: true,
        focused: state.focus == Focus::Name,
        ..TextField::new("Name", form.name())
    };
    draw_text_field(&name, frame, name_area);

    let location = Select {
        label: "Location *",
        options: form.location_options(),
        selected: form.location(),
        placeholder: LOCATION_PLACEHOLDER,
        focused: state.focus == Focus::Location,
    };
    draw_select(&location, frame, location_area);

    let buttons = Line::from(vec![
        button("Clear", state.focus == Focus::Clear),
        Span::raw("  "),
        button("Add", state.focus == Focus::Add),
    ]);
    frame.render_widget(Paragraph::new(buttons), buttons_area);

    let table_focused = state.focus == Focus::Table;
    draw_entry_table(
        form.entries(),
        &mut state.table,
        table_focused,
        frame,
        table_area,
    );

    let footer = Paragraph::new(Line::from(
        "Tab: next  \u{2190}\u{2192}: location  \u{2191}\u{2193}/PgUp/PgDn: scroll  Enter: add  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if let Some(message) = state.alert {
        draw_alert(message, frame, area);
    }
}
