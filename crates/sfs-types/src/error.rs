use thiserror::Error;

/// Errors produced while validating data a writer intends to persist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The object declared for a section exposes no writable member.
    #[error("no writable fields for section [{header}]")]
    NoWritableFields { header: String },

    /// The header cannot be written as a section marker.
    #[error("invalid header {header:?}: {reason}")]
    InvalidHeader { header: String, reason: String },

    /// The entry name cannot be written in front of the separator.
    #[error("invalid entry name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    /// The entry value would span more than one line.
    #[error("invalid value for {name:?}: {reason}")]
    InvalidValue { name: String, reason: String },
}

/// Convenience alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;
