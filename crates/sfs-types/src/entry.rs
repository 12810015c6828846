//! Entries, section markers, and declared sections.
//!
//! An entry is a single line of the form `name: value`. The name is
//! everything before the first `:`; the value starts two characters after
//! it, so exactly one character (conventionally a space) is skipped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator written between an entry's name and value.
pub const ENTRY_SEPARATOR: &str = ": ";

/// Start marker for a section: `[header]`.
pub fn open_marker(header: &str) -> String {
    format!("[{header}]")
}

/// End marker for a section: `[/header]`.
pub fn close_marker(header: &str) -> String {
    format!("[/{header}]")
}

/// A single `name: value` pair inside a section.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// Text before the first `:` of the line.
    pub name: String,
    /// Text from two characters after the first `:` to end of line.
    pub value: String,
}

impl Entry {
    /// Create an entry from a name and a value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Split a stored line into name and value.
    ///
    /// A line without `:` yields the whole line as name and an empty value.
    /// A line ending right after its `:` yields an empty value.
    pub fn parse_line(line: &str) -> Self {
        match line.find(':') {
            Some(idx) => {
                let mut rest = line[idx + 1..].chars();
                rest.next();
                Self::new(&line[..idx], rest.as_str())
            }
            None => Self::new(line, ""),
        }
    }

    /// The name portion of a stored line.
    pub fn name_of(line: &str) -> &str {
        match line.find(':') {
            Some(idx) => &line[..idx],
            None => line,
        }
    }

    /// Render the entry as the line it occupies on disk (no newline).
    pub fn to_line(&self) -> String {
        format!("{}{ENTRY_SEPARATOR}{}", self.name, self.value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{ENTRY_SEPARATOR}{}", self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Entry {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// The entries a writer intends to persist under one header.
///
/// Built fresh for every write; never persisted as such.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredSection {
    pub header: String,
    pub entries: Vec<Entry>,
}

impl DeclaredSection {
    pub fn new(header: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            header: header.into(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
