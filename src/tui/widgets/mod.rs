//! Reusable TUI widgets.

pub mod alert;
pub mod entry_table;
pub mod form;
pub mod select;

pub use alert::draw_alert;
pub use entry_table::draw_entry_table;
pub use form::{TEXT_FIELD_HEIGHT, TextField, draw_text_field};
pub use select::{Select, cycle_option, draw_select};
