//! Session history of completed calculations
//!
//! Entries are fully rendered `"a op b = result"` strings kept newest
//! first. The list grows without bound for the session and is emptied only
//! by an explicit clear-history action.

use std::collections::VecDeque;

/// Newest-first log of completed calculations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Prepends a rendered entry; the newest entry is always first
    pub fn record(&mut self, entry: String) {
        self.entries.push_front(entry);
    }

    /// Number of recorded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True while no calculation has completed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry at `index`, 0 being the newest
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// The most recent entry
    #[must_use]
    pub fn newest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Iterates entries newest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Clones the entries into a vector, newest first
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// Serializes the entries to JSON, newest first
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Restores a history from a JSON export
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: VecDeque<String> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Renders the whole session as a newline-joined transcript
    #[must_use]
    pub fn transcript(&self) -> String {
        self.entries
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Extracts the recalled value from an entry: the text after the first
/// `" = "`. Entries without a result marker yield `None`.
#[must_use]
pub fn recalled_value(entry: &str) -> Option<&str> {
    entry.split_once(" = ").map(|(_, result)| result)
}
