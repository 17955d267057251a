use thiserror::Error;

/// Alert text shown when `Add` is attempted with a blank name or no location.
pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Both name and location are required! They cannot be empty!";

/// The inline error shown beneath the name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name validator rejected the name.
    #[error("The name is invalid")]
    Invalid,
    /// An entry with the same name (ignoring case) is already in the table.
    #[error("this name has already been taken")]
    Taken,
}

/// A required field that was left empty on `Add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingField {
    #[error("name is required")]
    Name,
    #[error("location is required")]
    Location,
}

/// Checks that the name has non-whitespace content and a location is chosen.
///
/// The name is checked first; only one missing field is reported.
pub fn check_required(name: &str, location: &str) -> Result<(), MissingField> {
    if name.trim().is_empty() {
        Err(MissingField::Name)
    } else if location.is_empty() {
        Err(MissingField::Location)
    } else {
        Ok(())
    }
}
