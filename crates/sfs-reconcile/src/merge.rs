//! Rewrite-merge over an in-memory line buffer.

use tracing::{debug, warn};

use sfs_codec::section_lines;
use sfs_index::{entries, header_exists, section_bounds};
use sfs_types::{close_marker, open_marker, DeclaredSection, Entry};

use crate::error::ReconcileResult;
use crate::options::MergeStrategy;

/// Headers touched by a rewrite-merge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Sections whose block was replaced in place.
    pub replaced: Vec<String>,
    /// Sections that were missing and got appended.
    pub appended: Vec<String>,
}

impl MergeReport {
    pub fn len(&self) -> usize {
        self.replaced.len() + self.appended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replaced.is_empty() && self.appended.is_empty()
    }
}

/// Combine a writer's declared entries with the entries found on disk.
pub fn merge_entries(declared: &[Entry], disk: &[Entry], strategy: MergeStrategy) -> Vec<Entry> {
    match strategy {
        MergeStrategy::Positional => {
            let mut merged = declared.to_vec();
            for (j, entry) in disk.iter().enumerate() {
                match merged.get_mut(j) {
                    Some(slot) => *slot = entry.clone(),
                    None => merged.push(entry.clone()),
                }
            }
            merged
        }
        MergeStrategy::ByName => {
            let mut merged: Vec<Entry> = declared
                .iter()
                .map(|entry| {
                    disk.iter()
                        .find(|d| d.name == entry.name)
                        .cloned()
                        .unwrap_or_else(|| entry.clone())
                })
                .collect();
            merged.extend(
                disk.iter()
                    .filter(|d| !declared.iter().any(|e| e.name == d.name))
                    .cloned(),
            );
            merged
        }
    }
}

/// Merge every declared section into `lines`.
///
/// An existing block (open marker through close marker) is replaced in
/// place; the line after it and every other line are left untouched. A
/// missing section is appended as a full block.
pub fn merge_sections(
    lines: &mut Vec<String>,
    sections: &[DeclaredSection],
    strategy: MergeStrategy,
) -> ReconcileResult<MergeReport> {
    let mut report = MergeReport::default();

    for section in sections {
        let header = section.header.as_str();
        if !header_exists(lines.as_slice(), header) {
            lines.extend(section_lines(header, &section.entries));
            debug!(header, entries = section.len(), "appended missing section");
            report.appended.push(header.to_string());
            continue;
        }

        let bounds = section_bounds(lines.as_slice(), header)?;
        let disk = entries(lines.as_slice(), header)?;
        if disk.len() > section.len() && strategy == MergeStrategy::Positional {
            warn!(
                header,
                declared = section.len(),
                on_disk = disk.len(),
                "keeping on-disk entries past the declared count"
            );
        }
        let merged = merge_entries(&section.entries, &disk, strategy);

        let mut block = Vec::with_capacity(merged.len() + 2);
        block.push(open_marker(header));
        block.extend(merged.iter().map(Entry::to_line));
        block.push(close_marker(header));
        lines.splice(bounds.block_range(), block);

        debug!(header, line = bounds.open, entries = merged.len(), "replaced section in place");
        report.replaced.push(header.to_string());
    }

    Ok(report)
}
