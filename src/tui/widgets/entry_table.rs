//! The entries table: a `Name`/`Location` header over at least five rows.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Row, Table, TableState};

use crate::model::{Entry, table_rows};

/// Builds the table body, padding with blank rows up to the minimum.
pub fn entry_rows(entries: &[Entry]) -> Vec<Row<'_>> {
    table_rows(entries)
        .into_iter()
        .map(|row| match row {
            Some(entry) => Row::new(vec![entry.name(), entry.location()]),
            None => Row::new(vec!["", ""]),
        })
        .collect()
}

/// Renders the entries table.
///
/// `state` carries the selected row and scroll offset; ratatui keeps the
/// selection in view. The selection is only highlighted when `focused`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_entry_table(
    entries: &[Entry],
    state: &mut TableState,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let header = Row::new(vec!["Name", "Location"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let border = if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let highlight = if focused {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default()
    };

    let widths = [Constraint::Percentage(50), Constraint::Percentage(50)];
    let table = Table::new(entry_rows(entries), widths)
        .header(header)
        .row_highlight_style(highlight)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_stateful_widget(table, area, state);
}
