use tracing::debug;

use sfs_convert::{convert, ConverterRegistry, FieldValue, ValueConverter};
use sfs_index::{self as index, MatchMode};
use sfs_store::{AsyncLineStore, LineStore};
use sfs_types::Entry;

use crate::config::SfsConfig;
use crate::error::{SdkError, SdkResult};
use crate::load::{FieldLoader, LoadFields};

/// Typed read access to a line store.
///
/// Every call re-reads the store; nothing is cached between calls.
#[derive(Debug)]
pub struct FieldsReader<S> {
    store: S,
    registry: ConverterRegistry,
    mode: MatchMode,
}

impl<S> FieldsReader<S> {
    /// Reader with the built-in converters and exact matching.
    pub fn new(store: S) -> Self {
        Self {
            store,
            registry: ConverterRegistry::with_builtins(),
            mode: MatchMode::default(),
        }
    }

    pub fn with_config(store: S, config: &SfsConfig) -> Self {
        Self {
            mode: config.match_mode,
            ..Self::new(store)
        }
    }

    /// Replace the converter registry.
    pub fn with_registry(mut self, registry: ConverterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register the strategy used to read values of type `T`.
    pub fn register<T: 'static>(
        &mut self,
        converter: impl ValueConverter<T> + 'static,
    ) -> &mut Self {
        self.registry.register::<T>(converter);
        self
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn decode<T: FieldValue>(&self, header: &str, name: &str, raw: &str) -> SdkResult<T> {
        convert::<T>(raw, &self.registry).map_err(|e| SdkError::value(header, name, e))
    }
}

impl<S: LineStore> FieldsReader<S> {
    /// Value of `name` in `[header]`, converted to `T`.
    pub fn value<T: FieldValue>(&self, name: &str, header: &str) -> SdkResult<T> {
        let raw = self.raw_value(name, header)?;
        self.decode(header, name, &raw)
    }

    /// Value of `name` in `[header]` as stored.
    pub fn raw_value(&self, name: &str, header: &str) -> SdkResult<String> {
        let lines = self.store.read_lines()?;
        let raw = index::find_value_by_name_and_header(&lines, header, name, self.mode)?;
        debug!(header, name, "read value");
        Ok(raw)
    }

    pub fn entries(&self, header: &str) -> SdkResult<Vec<Entry>> {
        let lines = self.store.read_lines()?;
        Ok(index::entries(&lines, header)?)
    }

    pub fn entry_at(&self, header: &str, ordinal: usize) -> SdkResult<Entry> {
        let lines = self.store.read_lines()?;
        Ok(index::entry_at(&lines, header, ordinal)?)
    }

    pub fn entry_count(&self, header: &str) -> SdkResult<usize> {
        let lines = self.store.read_lines()?;
        Ok(index::entry_count(&lines, header)?)
    }

    /// Absolute line index of `entry` within `[header]`.
    pub fn index_of(&self, header: &str, entry: &Entry) -> SdkResult<usize> {
        let lines = self.store.read_lines()?;
        Ok(index::find_entry_index_by_value(&lines, header, &entry.name, &entry.value, self.mode)?)
    }

    /// Whether the store holds `[header]`. A missing store holds nothing.
    pub fn has_header(&self, header: &str) -> SdkResult<bool> {
        let lines = self.store.read_lines_or_empty()?;
        Ok(index::header_exists(&lines, header))
    }

    pub fn headers(&self) -> SdkResult<Vec<String>> {
        let lines = self.store.read_lines_or_empty()?;
        Ok(index::headers(&lines))
    }

    /// Overwrite the bound members of `target` from one snapshot of the store.
    ///
    /// Returns the number of members that were overwritten.
    pub fn load<T: LoadFields + ?Sized>(&self, target: &mut T) -> SdkResult<usize> {
        let lines = self.store.read_lines()?;
        let mut loader = FieldLoader::new(&lines, &self.registry, self.mode);
        target.load_fields(&mut loader)?;
        debug!(loaded = loader.loaded(), skipped = loader.skipped(), "loaded fields");
        Ok(loader.loaded())
    }
}

impl<S: AsyncLineStore> FieldsReader<S> {
    pub async fn value_async<T: FieldValue>(&self, name: &str, header: &str) -> SdkResult<T> {
        let raw = self.raw_value_async(name, header).await?;
        self.decode(header, name, &raw)
    }

    pub async fn raw_value_async(&self, name: &str, header: &str) -> SdkResult<String> {
        let lines = self.store.read_lines_async().await?;
        Ok(index::find_value_by_name_and_header(&lines, header, name, self.mode)?)
    }

    pub async fn entries_async(&self, header: &str) -> SdkResult<Vec<Entry>> {
        let lines = self.store.read_lines_async().await?;
        Ok(index::entries(&lines, header)?)
    }

    pub async fn load_async<T: LoadFields + ?Sized>(&self, target: &mut T) -> SdkResult<usize> {
        let lines = self.store.read_lines_async().await?;
        let mut loader = FieldLoader::new(&lines, &self.registry, self.mode);
        target.load_fields(&mut loader)?;
        Ok(loader.loaded())
    }
}
