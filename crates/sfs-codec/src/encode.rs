use sfs_types::{close_marker, open_marker, DeclaredSection, Entry};

/// Encode one section as text: open marker, entries, close marker, blank line.
pub fn encode_section(header: &str, entries: &[Entry]) -> String {
    let mut block = String::new();
    block.push_str(&open_marker(header));
    block.push('\n');
    for entry in entries {
        block.push_str(&entry.to_line());
        block.push('\n');
    }
    block.push_str(&close_marker(header));
    block.push_str("\n\n");
    block
}

/// Encode every section in declaration order.
pub fn encode_sections(sections: &[DeclaredSection]) -> String {
    sections
        .iter()
        .map(|s| encode_section(&s.header, &s.entries))
        .collect()
}

/// One section as lines, trailing blank line included.
pub fn section_lines(header: &str, entries: &[Entry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 3);
    lines.push(open_marker(header));
    lines.extend(entries.iter().map(Entry::to_line));
    lines.push(close_marker(header));
    lines.push(String::new());
    lines
}

/// Every section as lines, in declaration order.
pub fn sections_lines(sections: &[DeclaredSection]) -> Vec<String> {
    sections
        .iter()
        .flat_map(|s| section_lines(&s.header, &s.entries))
        .collect()
}

/// Split encoded text into lines.
///
/// Only `\n`-terminated lines are kept; a trailing fragment without a
/// terminator is dropped. A `\r` before the `\n` is removed.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n')
        .filter_map(|chunk| chunk.strip_suffix('\n'))
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sfs_index::{entries, find_value_by_name_and_header, MatchMode};

    fn save_section() -> DeclaredSection {
        DeclaredSection::new(
            "TestSaveHeader",
            vec![
                Entry::new("testEnum", "One"),
                Entry::new("OtherVar2", "1"),
                Entry::new("testWriteClass", "100"),
            ],
        )
    }

    #[test]
    fn encodes_block_format() {
        let section = save_section();
        assert_eq!(
            encode_section(&section.header, &section.entries),
            "[TestSaveHeader]\ntestEnum: One\nOtherVar2: 1\ntestWriteClass: 100\n\
             [/TestSaveHeader]\n\n"
        );
    }

    #[test]
    fn encodes_empty_section() {
        assert_eq!(encode_section("E", &[]), "[E]\n[/E]\n\n");
        assert_eq!(section_lines("E", &[]), ["[E]", "[/E]", ""]);
    }

    #[test]
    fn sections_concatenate_in_order() {
        let sections = vec![
            DeclaredSection::new("A", vec![Entry::new("a", "1")]),
            DeclaredSection::new("B", vec![]),
        ];
        assert_eq!(encode_sections(&sections), "[A]\na: 1\n[/A]\n\n[B]\n[/B]\n\n");
    }

    #[test]
    fn lines_agree_with_text() {
        let sections = vec![
            save_section(),
            DeclaredSection::new("12345", vec![Entry::new("k", "v")]),
        ];
        assert_eq!(split_lines(&encode_sections(&sections)), sections_lines(&sections));
    }

    #[test]
    fn split_drops_unterminated_tail() {
        assert_eq!(split_lines("a\nb\nc"), ["a", "b"]);
        assert_eq!(split_lines("a\r\n\n"), ["a", ""]);
        assert!(split_lines("").is_empty());
        assert!(split_lines("tail").is_empty());
    }

    #[test]
    fn encoding_is_deterministic() {
        let sections = vec![save_section()];
        assert_eq!(encode_sections(&sections), encode_sections(&sections));
    }

    #[test]
    fn decoded_entries_match_declared() {
        let section = save_section();
        let lines = section_lines(&section.header, &section.entries);
        assert_eq!(entries(&lines, &section.header).unwrap(), section.entries);
    }

    proptest::proptest! {
        #[test]
        fn lookup_returns_encoded_values(
            header in "[A-Za-z0-9_]{1,12}",
            pairs in proptest::collection::btree_map(
                "[a-z][a-z0-9_]{0,8}",
                "[^\\n\\r]{0,16}",
                1..8,
            ),
        ) {
            let declared: Vec<Entry> = pairs
                .iter()
                .map(|(k, v)| Entry::new(k.clone(), v.clone()))
                .collect();
            let lines = split_lines(&encode_section(&header, &declared));
            for entry in &declared {
                let found =
                    find_value_by_name_and_header(&lines, &header, &entry.name, MatchMode::Exact)
                        .unwrap();
                proptest::prop_assert_eq!(&found, &entry.value);
            }
        }
    }
}
