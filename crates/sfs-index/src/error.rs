//! Error types for the index crate.

/// Errors that can occur while locating sections and entries.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// No line is exactly equal to the requested text.
    #[error("line not found: {line:?}")]
    LineNotFound { line: String },

    /// No entry in the section matches the name/value pair.
    #[error("field {name:?} with value {value:?} not found in section [{header}]")]
    FieldNotFound {
        header: String,
        name: String,
        value: String,
    },

    /// No entry in the section carries the name.
    #[error("name {name:?} not found in section [{header}]")]
    NameNotFound { header: String, name: String },

    /// The ordinal is past the last entry of the section.
    #[error("entry #{ordinal} out of range for section [{header}] with {count} entries")]
    OrdinalOutOfRange {
        header: String,
        ordinal: usize,
        count: usize,
    },
}

/// Convenience alias for index results.
pub type IndexResult<T> = Result<T, IndexError>;
