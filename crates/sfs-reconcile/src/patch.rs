//! Single-entry patching.

use tracing::debug;

use sfs_index::{find_entry_index_by_value, MatchMode};
use sfs_types::{validate_header, validate_name, validate_value, Entry};

use crate::error::ReconcileResult;

/// Rewrite the line holding `old` inside `[header]` so it reads `new`.
///
/// Every occurrence of `"{old.name}: {old.value}"` in that one line is
/// replaced; no other line changes. Returns the index of the patched line.
pub fn patch_lines(
    lines: &mut [String],
    header: &str,
    old: &Entry,
    new: &Entry,
    mode: MatchMode,
) -> ReconcileResult<usize> {
    validate_header(header)?;
    validate_name(&new.name)?;
    validate_value(&new.name, &new.value)?;

    let idx = find_entry_index_by_value(&*lines, header, &old.name, &old.value, mode)?;
    let patched = lines[idx].replace(&old.to_line(), &new.to_line());
    debug!(header, line = idx, name = %new.name, "patched entry");
    lines[idx] = patched;
    Ok(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReconcileError;
    use sfs_index::IndexError;
    use sfs_types::ValidationError;

    fn buffer() -> Vec<String> {
        ["[S]", "k: 1", "kk: 1", "[/S]", "", "[T]", "k: 1", "[/T]", ""]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn patch(
        lines: &mut [String],
        header: &str,
        old: (&str, &str),
        new: (&str, &str),
        mode: MatchMode,
    ) -> ReconcileResult<usize> {
        let old = Entry::new(old.0, old.1);
        let new = Entry::new(new.0, new.1);
        patch_lines(lines, header, &old, &new, mode)
    }

    #[test]
    fn patches_only_the_matched_line() {
        let mut lines = buffer();
        let before = lines.clone();
        let idx = patch(&mut lines, "S", ("k", "1"), ("k", "2"), MatchMode::Exact).unwrap();

        assert_eq!(idx, 1);
        assert_eq!(lines[1], "k: 2");
        for (i, (after, before)) in lines.iter().zip(&before).enumerate() {
            if i != 1 {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn patch_can_rename() {
        let mut lines = buffer();
        patch(&mut lines, "T", ("k", "1"), ("key", "9"), MatchMode::Exact).unwrap();
        assert_eq!(lines[6], "key: 9");
        assert_eq!(lines[1], "k: 1");
    }

    #[test]
    fn substring_mode_hits_suffix_names() {
        let mut lines = vec!["[S]".to_string(), "kk: 1".to_string(), "[/S]".to_string()];
        patch(&mut lines, "S", ("k", "1"), ("k", "2"), MatchMode::Substring).unwrap();
        assert_eq!(lines[1], "kk: 2");
    }

    #[test]
    fn missing_entry() {
        let mut lines = buffer();
        let err = patch(&mut lines, "S", ("k", "7"), ("k", "8"), MatchMode::Exact).unwrap_err();
        assert!(matches!(err, ReconcileError::Index(IndexError::FieldNotFound { .. })));
        assert_eq!(lines, buffer());
    }

    #[test]
    fn missing_header() {
        let mut lines = buffer();
        let err = patch(&mut lines, "U", ("k", "1"), ("k", "2"), MatchMode::Exact).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn rejects_multiline_value() {
        let mut lines = buffer();
        let err = patch(&mut lines, "S", ("k", "1"), ("k", "a\nb"), MatchMode::Exact).unwrap_err();
        assert!(matches!(err, ReconcileError::Validation(ValidationError::InvalidValue { .. })));
        assert_eq!(lines, buffer());
    }
}
