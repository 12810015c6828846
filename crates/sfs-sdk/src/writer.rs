use tracing::debug;

use sfs_codec::declare_section;
use sfs_reconcile::{MergeReport, Reconciler};
use sfs_store::{AsyncLineStore, LineStore};
use sfs_types::{DeclaredSection, Entry, EnumerationConfig, FieldSource};

use crate::config::SfsConfig;
use crate::error::SdkResult;

/// Writes field sources to a line store, one section per source.
///
/// ```
/// use sfs_sdk::{FieldList, FieldSource, FieldsWriter, InMemoryLineStore};
///
/// struct Volume(u8);
///
/// impl FieldSource for Volume {
///     fn enumerate(&self, fields: &mut FieldList) {
///         fields.public("volume", self.0);
///     }
/// }
///
/// let store = InMemoryLineStore::new();
/// FieldsWriter::new(&store)
///     .section("Audio", &Volume(7))
///     .unwrap()
///     .write()
///     .unwrap();
/// assert_eq!(store.text().unwrap().unwrap(), "[Audio]\nvolume: 7\n[/Audio]\n\n");
/// ```
#[derive(Debug)]
pub struct FieldsWriter<S> {
    reconciler: Reconciler<S>,
    enumeration: EnumerationConfig,
}

impl<S> FieldsWriter<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, &SfsConfig::default())
    }

    pub fn with_config(store: S, config: &SfsConfig) -> Self {
        Self {
            reconciler: Reconciler::with_options(store, config.reconcile_options()),
            enumeration: config.enumeration,
        }
    }

    /// Declare `source` under `header`.
    ///
    /// Fails when the header is invalid or `source` has nothing to write.
    pub fn section<T: FieldSource + ?Sized>(mut self, header: &str, source: &T) -> SdkResult<Self> {
        let section = declare_section(header, source, &self.enumeration)?;
        self.reconciler.push_section(section)?;
        Ok(self)
    }

    /// Declare an already built section.
    pub fn declared(mut self, section: DeclaredSection) -> SdkResult<Self> {
        self.reconciler.push_section(section)?;
        Ok(self)
    }

    pub fn sections(&self) -> &[DeclaredSection] {
        self.reconciler.sections()
    }

    pub fn store(&self) -> &S {
        self.reconciler.store()
    }
}

impl<S: LineStore> FieldsWriter<S> {
    /// Replace the store's content with every declared section.
    pub fn write(&self) -> SdkResult<()> {
        Ok(self.reconciler.write()?)
    }

    /// Merge declared sections with what the store already holds.
    ///
    /// Existing values win over declared ones; see
    /// [`MergeStrategy`](sfs_reconcile::MergeStrategy) for how they are paired.
    pub fn rewrite(&self) -> SdkResult<MergeReport> {
        let report = self.reconciler.rewrite_merge()?;
        debug!(replaced = report.replaced.len(), appended = report.appended.len(), "rewrote store");
        Ok(report)
    }

    /// Replace one stored entry. Declared sections are not involved.
    pub fn patch(&self, header: &str, old: &Entry, new: &Entry) -> SdkResult<usize> {
        Ok(self.reconciler.patch(header, old, new)?)
    }
}

impl<S: AsyncLineStore> FieldsWriter<S> {
    pub async fn write_async(&self) -> SdkResult<()> {
        Ok(self.reconciler.write_async().await?)
    }

    pub async fn rewrite_async(&self) -> SdkResult<MergeReport> {
        Ok(self.reconciler.rewrite_merge_async().await?)
    }

    pub async fn patch_async(&self, header: &str, old: &Entry, new: &Entry) -> SdkResult<usize> {
        Ok(self.reconciler.patch_async(header, old, new).await?)
    }
}
