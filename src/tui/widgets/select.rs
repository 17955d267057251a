//! Dropdown-style option picker cycled with the arrow keys.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// What to draw for a select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Select<'a> {
    pub label: &'a str,
    pub options: &'a [String],
    /// Current selection; empty means nothing is selected.
    pub selected: &'a str,
    /// Disabled entry shown while nothing is selected.
    pub placeholder: &'a str,
    pub focused: bool,
}

/// Returns the option after (or before) `current`, wrapping around.
///
/// When `current` is not among `options` the first option is returned.
/// Returns `None` only when there are no options.
pub fn cycle_option<'a>(options: &'a [String], current: &str, forward: bool) -> Option<&'a str> {
    let len = options.len();
    if len == 0 {
        return None;
    }
    let next = match options.iter().position(|o| o == current) {
        Some(pos) if forward => (pos + 1) % len,
        Some(pos) => (pos + len - 1) % len,
        None => 0,
    };
    Some(options[next].as_str())
}

/// Renders the select as `◀ value ▶` inside a bordered box.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_select(select: &Select, frame: &mut Frame, area: Rect) {
    let border = if select.focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(select.label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let arrows = Style::default().fg(if select.options.is_empty() {
        Color::DarkGray
    } else {
        Color::Cyan
    });
    let value = if select.selected.is_empty() {
        Span::styled(select.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(select.selected)
    };
    let line = Line::from(vec![
        Span::styled("\u{25c0} ", arrows),
        value,
        Span::styled(" \u{25b6}", arrows),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
