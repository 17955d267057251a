//! Single-line text input with an inline error slot.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// What to draw for one text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextField<'a> {
    /// Display label shown in the border.
    pub label: &'a str,
    /// Current text value.
    pub value: &'a str,
    /// Grey hint shown while the value is empty.
    pub placeholder: &'a str,
    /// Error message shown on the line below the field.
    pub error: Option<&'a str>,
    /// Whether the field must be non-empty on submit.
    pub required: bool,
    pub focused: bool,
}

impl<'a> TextField<'a> {
    /// Creates an unfocused field with no placeholder or error.
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            error: None,
            required: false,
            focused: false,
        }
    }

    /// Border colour: red on error, yellow when focused, grey otherwise.
    pub fn border_color(&self) -> Color {
        if self.error.is_some() {
            Color::Red
        } else if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        }
    }

    /// Title text, with ` *` appended for required fields.
    pub fn title(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }
}

/// Height a text field needs: three bordered rows plus one for the error.
pub const TEXT_FIELD_HEIGHT: u16 = 4;

/// Renders `field` with its error line underneath.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_text_field(field: &TextField, frame: &mut Frame, area: Rect) {
    let [input_area, error_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let block = Block::default()
        .title(field.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(field.border_color()));

    let mut spans = if field.value.is_empty() && !field.placeholder.is_empty() {
        vec![Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::raw(field.value)]
    };
    if field.focused {
        spans.insert(
            usize::from(!field.value.is_empty()),
            Span::styled("\u{2588}", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        );
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

    if let Some(err) = field.error {
        let error = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
        frame.render_widget(error, error_area.inner(ratatui::layout::Margin::new(1, 0)));
    }
}
