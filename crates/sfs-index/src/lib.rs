//! Section and entry lookup for the Section Field Store.
//!
//! Every lookup re-scans a line sequence; no parsed tree is kept between
//! calls. A section is the run of lines strictly between the first line
//! equal to `[header]` and the first following line equal to `[/header]`.
//!
//! # Key Types
//!
//! - [`SectionBounds`] -- Marker positions of one section
//! - [`SectionIndex`] -- Borrowed view over a line slice with a [`MatchMode`]
//! - [`MatchMode`] -- Substring or exact entry matching
//! - [`IndexError`] -- Missing markers, entries, and out-of-range ordinals
//!
//! The free functions in [`scan`] are the primitives; [`SectionIndex`]
//! bundles them with a match mode.

pub mod error;
pub mod index;
pub mod scan;

pub use error::{IndexError, IndexResult};
pub use index::SectionIndex;
pub use scan::{
    entries, entry_at, entry_count, find_entry_index_by_value, find_line_index,
    find_line_index_from, find_value_by_name_and_header, header_exists, headers, section_bounds,
    MatchMode, SectionBounds,
};
