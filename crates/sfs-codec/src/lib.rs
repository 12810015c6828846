//! Section block encoding for the Section Field Store.
//!
//! A section is written as
//!
//! ```text
//! [header]
//! name: value
//! [/header]
//!
//! ```
//!
//! with a blank line after every close marker. There is no decoder here:
//! reads go through `sfs-index`, which materializes only the entries asked
//! for.
//!
//! - [`encode`] -- text blocks and line blocks for declared sections
//! - [`declare`] -- turn a [`FieldSource`](sfs_types::FieldSource) into a
//!   validated [`DeclaredSection`](sfs_types::DeclaredSection)

pub mod declare;
pub mod encode;

pub use declare::{declare_section, validate_section};
pub use encode::{encode_section, encode_sections, section_lines, sections_lines, split_lines};
