//! High-level SDK for the Section Field Store.
//!
//! Provides the two entry points applications use:
//!
//! - [`FieldsReader`] -- typed lookups and object loading over a line store
//! - [`FieldsWriter`] -- declares sections from [`FieldSource`] objects and
//!   writes, merges or patches them
//!
//! Both are configured from an [`SfsConfig`], usually loaded from TOML.
//!
//! ```
//! use sfs_sdk::{
//!     field_enum, FieldList, FieldSource, FieldsReader, FieldsWriter, InMemoryLineStore,
//! };
//!
//! field_enum! {
//!     pub enum Level { Low, High }
//! }
//!
//! struct Settings {
//!     level: Level,
//!     retries: i32,
//! }
//!
//! impl FieldSource for Settings {
//!     fn enumerate(&self, fields: &mut FieldList) {
//!         fields.public("level", self.level).public("retries", self.retries);
//!     }
//! }
//!
//! let store = InMemoryLineStore::new();
//! let settings = Settings { level: Level::High, retries: 3 };
//! FieldsWriter::new(&store).section("Net", &settings).unwrap().write().unwrap();
//!
//! let reader = FieldsReader::new(&store);
//! assert_eq!(reader.value::<Level>("level", "Net").unwrap(), Level::High);
//! assert_eq!(reader.value::<i32>("retries", "Net").unwrap(), 3);
//! ```

pub mod config;
pub mod error;
pub mod load;
pub mod reader;
pub mod writer;

pub use config::SfsConfig;
pub use error::{SdkError, SdkResult};
pub use load::{FieldLoader, LoadFields};
pub use reader::FieldsReader;
pub use writer::FieldsWriter;

// Re-export key types
pub use sfs_convert::{
    convert, field_enum, ConverterRegistry, FieldEnum, FieldValue, FnConverter, ValueConverter,
};
pub use sfs_index::MatchMode;
pub use sfs_reconcile::{MergeReport, MergeStrategy, ReconcileOptions};
pub use sfs_store::{AsyncLineStore, FileLineStore, InMemoryLineStore, LineStore};
pub use sfs_types::{DeclaredSection, Entry, EnumerationConfig, FieldList, FieldSource, Visibility};
