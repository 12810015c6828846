//! The [`SectionIndex`] view.

use sfs_types::Entry;

use crate::error::IndexResult;
use crate::scan::{self, MatchMode, SectionBounds};

/// Borrowed view over a line sequence with a fixed [`MatchMode`].
///
/// Holds no parsed state: every call re-scans the slice.
pub struct SectionIndex<'a, S> {
    lines: &'a [S],
    mode: MatchMode,
}

impl<S> Clone for SectionIndex<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SectionIndex<'_, S> {}

impl<S> std::fmt::Debug for SectionIndex<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionIndex")
            .field("lines", &self.lines.len())
            .field("mode", &self.mode)
            .finish()
    }
}

impl<'a, S: AsRef<str>> SectionIndex<'a, S> {
    /// View `lines` with [`MatchMode::Exact`].
    pub fn new(lines: &'a [S]) -> Self {
        Self::with_mode(lines, MatchMode::default())
    }

    pub fn with_mode(lines: &'a [S], mode: MatchMode) -> Self {
        Self { lines, mode }
    }

    pub fn lines(&self) -> &'a [S] {
        self.lines
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn bounds(&self, header: &str) -> IndexResult<SectionBounds> {
        scan::section_bounds(self.lines, header)
    }

    pub fn entry_count(&self, header: &str) -> IndexResult<usize> {
        scan::entry_count(self.lines, header)
    }

    pub fn entry_at(&self, header: &str, ordinal: usize) -> IndexResult<Entry> {
        scan::entry_at(self.lines, header, ordinal)
    }

    pub fn entries(&self, header: &str) -> IndexResult<Vec<Entry>> {
        scan::entries(self.lines, header)
    }

    /// Raw value of the entry called `name` in the section.
    pub fn value(&self, header: &str, name: &str) -> IndexResult<String> {
        scan::find_value_by_name_and_header(self.lines, header, name, self.mode)
    }

    /// Absolute line index of `entry` in the section.
    pub fn index_of(&self, header: &str, entry: &Entry) -> IndexResult<usize> {
        scan::find_entry_index_by_value(self.lines, header, &entry.name, &entry.value, self.mode)
    }

    pub fn has_header(&self, header: &str) -> bool {
        scan::header_exists(self.lines, header)
    }

    pub fn headers(&self) -> Vec<String> {
        scan::headers(self.lines)
    }
}
