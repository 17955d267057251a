//! Blocking modal alert.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Returns a rectangle of at most `width` x `height` centred in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Renders `message` in a popup over whatever is underneath.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_alert(message: &str, frame: &mut Frame, area: Rect) {
    let popup = centered(area, 44.min(area.width), 7.min(area.height));
    let block = Block::default()
        .title(" Alert ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let lines = vec![
        Line::from(message),
        Line::from(""),
        Line::from("Enter: OK").style(Style::default().fg(Color::DarkGray)),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
