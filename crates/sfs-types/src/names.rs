//! Header, name, and value validation.
//!
//! Lookups are line based, so anything that would make a marker or an entry
//! ambiguous is rejected before it reaches the file:
//! - Headers must be non-empty, must not start with `/` (that line is a
//!   close marker), and must not contain `]` or line breaks
//! - Names must be non-empty and must not contain `:` or line breaks
//! - Values must not contain line breaks

use crate::error::{ValidationError, ValidationResult};

const LINE_BREAKS: &[char] = &['\n', '\r'];

/// Validate a section header, returning `Ok(())` if it can be written as
/// `[header]` / `[/header]`.
///
/// # Examples
///
/// ```
/// use sfs_types::validate_header;
///
/// assert!(validate_header("TestSaveHeader").is_ok());
/// assert!(validate_header("").is_err());
/// assert!(validate_header("a]b").is_err());
/// assert!(validate_header("/A").is_err());
/// ```
pub fn validate_header(header: &str) -> ValidationResult<()> {
    if header.is_empty() {
        return Err(ValidationError::InvalidHeader {
            header: header.to_string(),
            reason: "header must not be empty".into(),
        });
    }

    if header.starts_with('/') {
        return Err(ValidationError::InvalidHeader {
            header: header.to_string(),
            reason: "must not start with '/'".into(),
        });
    }

    if header.contains(']') {
        return Err(ValidationError::InvalidHeader {
            header: header.to_string(),
            reason: "must not contain ']'".into(),
        });
    }

    if header.contains(LINE_BREAKS) {
        return Err(ValidationError::InvalidHeader {
            header: header.to_string(),
            reason: "must not contain line breaks".into(),
        });
    }

    Ok(())
}

/// Validate an entry name.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "name must not be empty".into(),
        });
    }

    // The first ':' of a line ends the name.
    if name.contains(':') {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "must not contain ':'".into(),
        });
    }

    if name.contains(LINE_BREAKS) {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "must not contain line breaks".into(),
        });
    }

    Ok(())
}

/// Validate the value written for `name`.
pub fn validate_value(name: &str, value: &str) -> ValidationResult<()> {
    if value.contains(LINE_BREAKS) {
        return Err(ValidationError::InvalidValue {
            name: name.to_string(),
            reason: "must not contain line breaks".into(),
        });
    }
    Ok(())
}
