mod entry;
mod form;
mod validation;

pub use entry::{Entry, MIN_TABLE_ROWS, name_taken, table_rows};
pub use form::{Command, FormEvent, FormState, ValidationTicket};
pub use validation::{MissingField, NameError, REQUIRED_FIELDS_MESSAGE, check_required};
