/// Minimum number of body rows the entry table always shows.
pub const MIN_TABLE_ROWS: usize = 5;

/// A validated name/location pair stored in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    location: String,
}

impl Entry {
    /// Creates a new entry. Callers are responsible for the required-field
    /// and uniqueness checks; see [`FormState`](super::FormState).
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Returns the name exactly as it was typed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the selected location.
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// Returns `true` if any entry's name equals `candidate` ignoring case.
///
/// Both sides are uppercased in full; surrounding whitespace is significant.
pub fn name_taken(entries: &[Entry], candidate: &str) -> bool {
    let candidate = candidate.to_uppercase();
    entries.iter().any(|e| e.name.to_uppercase() == candidate)
}

/// Returns the table body: `max(MIN_TABLE_ROWS, entries.len())` rows, with
/// `None` for padding rows past the last entry.
pub fn table_rows(entries: &[Entry]) -> Vec<Option<&Entry>> {
    let len = entries.len().max(MIN_TABLE_ROWS);
    (0..len).map(|i| entries.get(i)).collect()
}
