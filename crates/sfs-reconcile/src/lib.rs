//! Write-side reconciliation for the Section Field Store.
//!
//! A [`Reconciler`] owns a line store and the sections a writer declared.
//! It can replace the whole backing text, merge the declared sections with
//! what is already on disk, or patch a single entry in place.
//!
//! # Write Paths
//!
//! - [`Reconciler::write`] -- encode every declared section and overwrite the store
//! - [`Reconciler::rewrite_merge`] -- merge with on-disk entries, replacing
//!   existing blocks in place and appending missing ones
//! - [`Reconciler::patch`] -- rewrite one entry line, leaving every other line intact
//!
//! Every path reads and writes the store at most once. The pure line-level
//! steps live in [`merge`] and [`patch`] so they can be reused over any
//! line buffer.

pub mod error;
pub mod merge;
pub mod options;
pub mod patch;
pub mod reconciler;

pub use error::{ReconcileError, ReconcileResult};
pub use merge::{merge_entries, merge_sections, MergeReport};
pub use options::{MergeStrategy, ReconcileOptions};
pub use patch::patch_lines;
pub use reconciler::Reconciler;
