//! Foundation types for the Section Field Store (SFS).
//!
//! SFS persists plain data objects into a sectioned, line-oriented text
//! format. Every other SFS crate depends on `sfs-types`.
//!
//! ```text
//! [Player]
//! name: Alice
//! level: 3
//! [/Player]
//!
//! ```
//!
//! # Key Types
//!
//! - [`Entry`] — One `name: value` line inside a section
//! - [`DeclaredSection`] — Header plus the entries a writer intends to persist
//! - [`FieldSource`] — Compile-time field enumeration for participating types
//! - [`FieldList`] — Collector passed to [`FieldSource::enumerate`]
//! - [`EnumerationConfig`] — Which member visibility takes part in enumeration
//! - [`ValidationError`] — Rejected headers, names, values, and empty sources

pub mod entry;
pub mod error;
pub mod fields;
pub mod names;

pub use entry::{close_marker, open_marker, DeclaredSection, Entry, ENTRY_SEPARATOR};
pub use error::{ValidationError, ValidationResult};
pub use fields::{
    enumerate_fields, has_fields, EnumerationConfig, FieldList, FieldSource, Visibility,
};
pub use names::{validate_header, validate_name, validate_value};
