//! Scan primitives over a line slice.
//!
//! All functions accept any `&[S]` where `S: AsRef<str>`, so both owned
//! `Vec<String>` buffers and borrowed `&[&str]` fixtures work.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use sfs_types::{close_marker, open_marker, Entry, ENTRY_SEPARATOR};

use crate::error::{IndexError, IndexResult};

/// How an entry line is matched against a requested name (and value).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The line contains `"{name}: "` (or `"{name}: {value}"`) anywhere.
    ///
    /// A name that is a suffix of another name, or a value that is a prefix
    /// of another value, can match the wrong line.
    Substring,
    /// The line's name equals `name` (and its whole text equals
    /// `"{name}: {value}"`).
    #[default]
    Exact,
}

impl MatchMode {
    /// Whether `line` is an entry called `name`.
    pub fn matches_name(&self, line: &str, name: &str) -> bool {
        match self {
            MatchMode::Substring => line.contains(&format!("{name}{ENTRY_SEPARATOR}")),
            MatchMode::Exact => line
                .strip_prefix(name)
                .is_some_and(|rest| rest.starts_with(':')),
        }
    }

    /// Whether `line` is the entry `name: value`.
    pub fn matches_entry(&self, line: &str, name: &str, value: &str) -> bool {
        let needle = format!("{name}{ENTRY_SEPARATOR}{value}");
        match self {
            MatchMode::Substring => line.contains(&needle),
            MatchMode::Exact => line == needle,
        }
    }
}

/// Marker positions of one section.
///
/// `open` is the index of `[header]`, `close` the index of the first
/// `[/header]` after it; entries occupy `open + 1 .. close`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SectionBounds {
    pub open: usize,
    pub close: usize,
}

impl SectionBounds {
    /// Index of the first entry line.
    pub fn start(&self) -> usize {
        self.open + 1
    }

    /// Index of the last entry line; below [`start`](Self::start) when the
    /// section is empty.
    pub fn end(&self) -> isize {
        self.close as isize - 1
    }

    /// Number of entry lines (`end - start + 1`).
    pub fn count(&self) -> usize {
        self.entry_range().len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Line indices of the entries.
    pub fn entry_range(&self) -> Range<usize> {
        self.start()..self.close
    }

    /// Line indices of the whole block, markers included.
    pub fn block_range(&self) -> Range<usize> {
        self.open..self.close + 1
    }
}

/// Index of the first line whose full content equals `exact`.
pub fn find_line_index<S: AsRef<str>>(lines: &[S], exact: &str) -> IndexResult<usize> {
    find_line_index_from(lines, 0, exact)
}

/// Index of the first line at or after `from` whose full content equals `exact`.
pub fn find_line_index_from<S: AsRef<str>>(
    lines: &[S],
    from: usize,
    exact: &str,
) -> IndexResult<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| line.as_ref() == exact)
        .map(|(idx, _)| idx)
        .ok_or_else(|| IndexError::LineNotFound {
            line: exact.to_string(),
        })
}

/// Locate the markers of the first section called `header`.
pub fn section_bounds<S: AsRef<str>>(lines: &[S], header: &str) -> IndexResult<SectionBounds> {
    let open = find_line_index(lines, &open_marker(header))?;
    let close = find_line_index_from(lines, open + 1, &close_marker(header))?;
    Ok(SectionBounds { open, close })
}

/// Number of entries in the section. Adjacent markers give 0.
pub fn entry_count<S: AsRef<str>>(lines: &[S], header: &str) -> IndexResult<usize> {
    Ok(section_bounds(lines, header)?.count())
}

/// The entry at `ordinal` (0-based) within the section.
pub fn entry_at<S: AsRef<str>>(lines: &[S], header: &str, ordinal: usize) -> IndexResult<Entry> {
    let bounds = section_bounds(lines, header)?;
    if ordinal >= bounds.count() {
        return Err(IndexError::OrdinalOutOfRange {
            header: header.to_string(),
            ordinal,
            count: bounds.count(),
        });
    }
    Ok(Entry::parse_line(lines[bounds.start() + ordinal].as_ref()))
}

/// Every entry of the section, in file order.
pub fn entries<S: AsRef<str>>(lines: &[S], header: &str) -> IndexResult<Vec<Entry>> {
    let bounds = section_bounds(lines, header)?;
    Ok(lines[bounds.entry_range()]
        .iter()
        .map(|line| Entry::parse_line(line.as_ref()))
        .collect())
}

/// Absolute line index of the entry `name: value` within the section.
pub fn find_entry_index_by_value<S: AsRef<str>>(
    lines: &[S],
    header: &str,
    name: &str,
    value: &str,
    mode: MatchMode,
) -> IndexResult<usize> {
    let bounds = section_bounds(lines, header)?;
    let found = bounds
        .entry_range()
        .find(|&idx| mode.matches_entry(lines[idx].as_ref(), name, value));

    match found {
        Some(idx) => {
            debug!(header, name, line = idx, "located entry by value");
            Ok(idx)
        }
        None => Err(IndexError::FieldNotFound {
            header: header.to_string(),
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Raw value of the first entry called `name` within the section.
pub fn find_value_by_name_and_header<S: AsRef<str>>(
    lines: &[S],
    header: &str,
    name: &str,
    mode: MatchMode,
) -> IndexResult<String> {
    let bounds = section_bounds(lines, header)?;
    lines[bounds.entry_range()]
        .iter()
        .map(|line| line.as_ref())
        .find(|line| mode.matches_name(line, name))
        .map(|line| Entry::parse_line(line).value)
        .ok_or_else(|| IndexError::NameNotFound {
            header: header.to_string(),
            name: name.to_string(),
        })
}

/// Whether some line equals `[header]`.
pub fn header_exists<S: AsRef<str>>(lines: &[S], header: &str) -> bool {
    let marker = open_marker(header);
    lines.iter().any(|line| line.as_ref() == marker)
}

/// Headers of every complete section, first occurrence only, in file order.
pub fn headers<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) else {
            continue;
        };
        if header.is_empty() || header.starts_with('/') || found.iter().any(|h| h == header) {
            continue;
        }
        if find_line_index_from(lines, idx + 1, &close_marker(header)).is_ok() {
            found.push(header.to_string());
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAVE: &[&str] = &[
        "[TestSaveHeader]",
        "testEnum: One",
        "testEnum2: TestType",
        "OtherVar2: 1",
        "testWriteClass: 100",
        "[/TestSaveHeader]",
        "",
        "[12345]",
        "testEnum: One",
        "testEnum2: TestType",
        "OtherVar2: 1",
        "testWriteClass: 100",
        "[/12345]",
        "",
    ];

    // -----------------------------------------------------------------------
    // Line addressing
    // -----------------------------------------------------------------------

    #[test]
    fn find_line_index_first_match() {
        assert_eq!(find_line_index(SAVE, "testEnum: One").unwrap(), 1);
        assert_eq!(find_line_index_from(SAVE, 2, "testEnum: One").unwrap(), 8);
    }

    #[test]
    fn find_line_index_requires_full_line() {
        let err = find_line_index(SAVE, "testEnum").unwrap_err();
        assert_eq!(err, IndexError::LineNotFound { line: "testEnum".into() });
    }

    // -----------------------------------------------------------------------
    // Bounds and counts
    // -----------------------------------------------------------------------

    #[test]
    fn bounds_of_first_section() {
        let bounds = section_bounds(SAVE, "TestSaveHeader").unwrap();
        assert_eq!(bounds, SectionBounds { open: 0, close: 5 });
        assert_eq!(bounds.start(), 1);
        assert_eq!(bounds.end(), 4);
        assert_eq!(bounds.count(), 4);
        assert_eq!(bounds.block_range(), 0..6);
    }

    #[test]
    fn adjacent_markers_are_empty() {
        let lines = ["[Empty]", "[/Empty]"];
        let bounds = section_bounds(&lines, "Empty").unwrap();
        assert!(bounds.end() < bounds.start() as isize);
        assert!(bounds.is_empty());
        assert_eq!(entry_count(&lines, "Empty").unwrap(), 0);
        assert!(entries(&lines, "Empty").unwrap().is_empty());
    }

    #[test]
    fn close_marker_before_open_is_not_used() {
        let lines = ["[/H]", "[H]", "a: 1", "[/H]"];
        assert_eq!(entry_count(&lines, "H").unwrap(), 1);
    }

    #[test]
    fn unterminated_section_fails() {
        let lines = ["[H]", "a: 1"];
        let err = section_bounds(&lines, "H").unwrap_err();
        assert_eq!(err, IndexError::LineNotFound { line: "[/H]".into() });
    }

    #[test]
    fn count_per_section() {
        assert_eq!(entry_count(SAVE, "TestSaveHeader").unwrap(), 4);
        assert_eq!(entry_count(SAVE, "12345").unwrap(), 4);
    }

    #[test]
    fn missing_header_is_line_not_found() {
        let err = entry_count(SAVE, "Nope").unwrap_err();
        assert_eq!(err, IndexError::LineNotFound { line: "[Nope]".into() });
    }

    // -----------------------------------------------------------------------
    // Entry access
    // -----------------------------------------------------------------------

    #[test]
    fn entry_at_ordinal() {
        assert_eq!(entry_at(SAVE, "12345", 2).unwrap(), Entry::new("OtherVar2", "1"));
    }

    #[test]
    fn entry_at_out_of_range() {
        let err = entry_at(SAVE, "12345", 4).unwrap_err();
        assert_eq!(
            err,
            IndexError::OrdinalOutOfRange {
                header: "12345".into(),
                ordinal: 4,
                count: 4,
            }
        );
    }

    #[test]
    fn entries_in_order() {
        let all = entries(SAVE, "TestSaveHeader").unwrap();
        let names: Vec<_> = all.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["testEnum", "testEnum2", "OtherVar2", "testWriteClass"]);
    }

    // -----------------------------------------------------------------------
    // Lookup by name
    // -----------------------------------------------------------------------

    #[test]
    fn value_by_name() {
        let value = find_value_by_name_and_header(
            SAVE,
            "TestSaveHeader",
            "testWriteClass",
            MatchMode::Exact,
        )
        .unwrap();
        assert_eq!(value, "100");
    }

    #[test]
    fn value_lookup_stays_inside_section() {
        let lines = ["[A]", "[/A]", "[B]", "k: 2", "[/B]"];
        let err =
            find_value_by_name_and_header(&lines, "A", "k", MatchMode::Substring).unwrap_err();
        assert_eq!(err, IndexError::NameNotFound { header: "A".into(), name: "k".into() });
    }

    #[test]
    fn substring_name_matches_suffix() {
        // "Enum: " is contained in "testEnum: One".
        let value =
            find_value_by_name_and_header(SAVE, "TestSaveHeader", "Enum", MatchMode::Substring)
                .unwrap();
        assert_eq!(value, "One");

        let err = find_value_by_name_and_header(SAVE, "TestSaveHeader", "Enum", MatchMode::Exact)
            .unwrap_err();
        assert!(matches!(err, IndexError::NameNotFound { .. }));
    }

    #[test]
    fn exact_name_ignores_longer_names() {
        let lines = ["[H]", "testEnum2: B", "testEnum: A", "[/H]"];
        let exact =
            find_value_by_name_and_header(&lines, "H", "testEnum", MatchMode::Exact).unwrap();
        assert_eq!(exact, "A");
    }

    // -----------------------------------------------------------------------
    // Lookup by value
    // -----------------------------------------------------------------------

    #[test]
    fn index_by_value_is_absolute() {
        let idx =
            find_entry_index_by_value(SAVE, "12345", "OtherVar2", "1", MatchMode::Exact).unwrap();
        assert_eq!(idx, 10);
    }

    #[test]
    fn index_by_value_missing() {
        let err = find_entry_index_by_value(SAVE, "12345", "OtherVar2", "2", MatchMode::Exact)
            .unwrap_err();
        assert_eq!(
            err,
            IndexError::FieldNotFound {
                header: "12345".into(),
                name: "OtherVar2".into(),
                value: "2".into(),
            }
        );
        assert!(err.to_string().contains("OtherVar2"));
        assert!(err.to_string().contains("12345"));
    }

    #[test]
    fn substring_value_matches_prefix() {
        let lines = ["[H]", "k: 10", "[/H]"];
        let idx = find_entry_index_by_value(&lines, "H", "k", "1", MatchMode::Substring).unwrap();
        assert_eq!(idx, 1);
        assert!(find_entry_index_by_value(&lines, "H", "k", "1", MatchMode::Exact).is_err());
    }

    #[test]
    fn index_by_value_never_leaves_section() {
        let lines = ["[A]", "x: 1", "[/A]", "k: 1"];
        assert!(find_entry_index_by_value(&lines, "A", "k", "1", MatchMode::Substring).is_err());
    }

    // -----------------------------------------------------------------------
    // Headers
    // -----------------------------------------------------------------------

    #[test]
    fn header_exists_checks_open_marker() {
        assert!(header_exists(SAVE, "TestSaveHeader"));
        assert!(header_exists(SAVE, "12345"));
        assert!(!header_exists(SAVE, "Missing"));
        assert!(!header_exists(SAVE, "TestSave"));
    }

    #[test]
    fn header_exists_matches_whole_line() {
        // `[/12345]` is a full line of the file, so the raw scan finds it.
        assert!(header_exists(SAVE, "/12345"));
        assert!(!header_exists(&["[A] trailing"], "A"));
    }

    #[test]
    fn headers_in_file_order() {
        assert_eq!(headers(SAVE), ["TestSaveHeader", "12345"]);
    }

    #[test]
    fn headers_skip_unterminated_and_duplicates() {
        let lines = ["[A]", "[/A]", "[B]", "[A]", "[/A]", "[]"];
        assert_eq!(headers(&lines), ["A"]);
    }

    #[test]
    fn first_duplicate_wins() {
        let lines = ["[D]", "k: first", "[/D]", "[D]", "k: second", "[/D]"];
        let value = find_value_by_name_and_header(&lines, "D", "k", MatchMode::Exact).unwrap();
        assert_eq!(value, "first");
    }

    proptest::proptest! {
        #[test]
        fn count_matches_lines_between_markers(n in 0usize..20) {
            let mut lines = vec!["[P]".to_string()];
            lines.extend((0..n).map(|i| format!("k{i}: {i}")));
            lines.push("[/P]".to_string());
            proptest::prop_assert_eq!(entry_count(&lines, "P").unwrap(), n);
        }
    }
}
