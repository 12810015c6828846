//! The [`Reconciler`]: declared sections bound to a line store.

use tracing::debug;

use sfs_codec::{sections_lines, validate_section};
use sfs_store::{AsyncLineStore, LineStore};
use sfs_types::{DeclaredSection, Entry};

use crate::error::ReconcileResult;
use crate::merge::{merge_sections, MergeReport};
use crate::options::ReconcileOptions;
use crate::patch::patch_lines;

/// Writes declared sections to a store.
///
/// No state is kept between calls besides the declared sections: every
/// operation re-reads the store, so edits made by others in between are
/// picked up (and may be overwritten).
#[derive(Debug)]
pub struct Reconciler<S> {
    store: S,
    sections: Vec<DeclaredSection>,
    options: ReconcileOptions,
}

impl<S> Reconciler<S> {
    pub fn new(store: S) -> Self {
        Self::with_options(store, ReconcileOptions::default())
    }

    pub fn with_options(store: S, options: ReconcileOptions) -> Self {
        Self {
            store,
            sections: Vec::new(),
            options,
        }
    }

    /// Declare one more section, in write order.
    pub fn push_section(&mut self, section: DeclaredSection) -> ReconcileResult<&mut Self> {
        validate_section(&section)?;
        self.sections.push(section);
        Ok(self)
    }

    pub fn sections(&self) -> &[DeclaredSection] {
        &self.sections
    }

    pub fn options(&self) -> ReconcileOptions {
        self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn encoded(&self) -> Vec<String> {
        sections_lines(&self.sections)
    }
}

impl<S: LineStore> Reconciler<S> {
    /// Replace the whole store with the declared sections.
    pub fn write(&self) -> ReconcileResult<()> {
        let lines = self.encoded();
        self.store.write_lines(&lines)?;
        debug!(sections = self.sections.len(), lines = lines.len(), "wrote store");
        Ok(())
    }

    /// Append the declared sections after whatever the store holds.
    pub fn append(&self) -> ReconcileResult<()> {
        let lines = self.encoded();
        self.store.append_lines(&lines)?;
        debug!(sections = self.sections.len(), lines = lines.len(), "appended to store");
        Ok(())
    }

    /// Merge the declared sections with the store's current content.
    ///
    /// A missing store is treated as empty. The store is written once.
    pub fn rewrite_merge(&self) -> ReconcileResult<MergeReport> {
        let mut lines = self.store.read_lines_or_empty()?;
        let report = merge_sections(&mut lines, &self.sections, self.options.merge_strategy)?;
        self.store.write_lines(&lines)?;
        Ok(report)
    }

    /// Rewrite the entry `old` in `[header]` as `new`.
    pub fn patch(&self, header: &str, old: &Entry, new: &Entry) -> ReconcileResult<usize> {
        let mut lines = self.store.read_lines()?;
        let idx = patch_lines(&mut lines, header, old, new, self.options.match_mode)?;
        self.store.write_lines(&lines)?;
        Ok(idx)
    }
}

impl<S: AsyncLineStore> Reconciler<S> {
    pub async fn write_async(&self) -> ReconcileResult<()> {
        let lines = self.encoded();
        self.store.write_lines_async(&lines).await?;
        debug!(sections = self.sections.len(), lines = lines.len(), "wrote store");
        Ok(())
    }

    pub async fn append_async(&self) -> ReconcileResult<()> {
        let lines = self.encoded();
        self.store.append_lines_async(&lines).await?;
        Ok(())
    }

    pub async fn rewrite_merge_async(&self) -> ReconcileResult<MergeReport> {
        let mut lines = self.store.read_lines_or_empty_async().await?;
        let report = merge_sections(&mut lines, &self.sections, self.options.merge_strategy)?;
        self.store.write_lines_async(&lines).await?;
        Ok(report)
    }

    pub async fn patch_async(
        &self,
        header: &str,
        old: &Entry,
        new: &Entry,
    ) -> ReconcileResult<usize> {
        let mut lines = self.store.read_lines_async().await?;
        let idx = patch_lines(&mut lines, header, old, new, self.options.match_mode)?;
        self.store.write_lines_async(&lines).await?;
        Ok(idx)
    }
}
