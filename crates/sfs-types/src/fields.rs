//! Field enumeration: which members of an object are persisted, and how.
//!
//! A participating type implements [`FieldSource`] and pushes each member it
//! wants written into a [`FieldList`], tagging it with a [`Visibility`]. The
//! list filters members according to the [`EnumerationConfig`] it was built
//! with, so the decision of which members take part is explicit per call.
//!
//! ```
//! use sfs_types::{enumerate_fields, EnumerationConfig, FieldList, FieldSource};
//!
//! struct Settings {
//!     volume: u8,
//!     secret: String,
//! }
//!
//! impl FieldSource for Settings {
//!     fn enumerate(&self, fields: &mut FieldList) {
//!         fields.public("volume", self.volume);
//!         fields.private("secret", &self.secret);
//!     }
//! }
//!
//! let settings = Settings { volume: 7, secret: "x".into() };
//! let public = enumerate_fields(&settings, &EnumerationConfig::public_only());
//! assert_eq!(public.len(), 1);
//! assert_eq!(public[0].value, "7");
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;

/// Visibility of a member, as declared by its [`FieldSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
}

/// Which members take part in enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumerationConfig {
    /// Include members declared [`Visibility::Private`].
    pub include_private: bool,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            include_private: true,
        }
    }
}

impl EnumerationConfig {
    /// Only members declared [`Visibility::Public`].
    pub fn public_only() -> Self {
        Self {
            include_private: false,
        }
    }

    /// Whether a member with the given visibility is included.
    pub fn includes(&self, visibility: Visibility) -> bool {
        match visibility {
            Visibility::Public => true,
            Visibility::Private => self.include_private,
        }
    }
}

/// Ordered collector of `(key, value)` pairs produced by a [`FieldSource`].
#[derive(Debug)]
pub struct FieldList {
    config: EnumerationConfig,
    entries: Vec<Entry>,
}

impl FieldList {
    /// Create an empty list filtering by `config`.
    pub fn new(config: EnumerationConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Push a member with an explicit visibility. Excluded members are dropped.
    pub fn field(&mut self, key: &str, value: impl Display, visibility: Visibility) -> &mut Self {
        if self.config.includes(visibility) {
            self.entries.push(Entry::new(key, value.to_string()));
        }
        self
    }

    /// Push a public member.
    pub fn public(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.field(key, value, Visibility::Public)
    }

    /// Push a private member.
    pub fn private(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.field(key, value, Visibility::Private)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

/// Compile-time field enumeration for a participating type.
pub trait FieldSource {
    /// Push every persisted member, in the order it should be written.
    fn enumerate(&self, fields: &mut FieldList);

    /// Whether at least one member survives the given configuration.
    fn has_fields(&self, config: &EnumerationConfig) -> bool {
        let mut fields = FieldList::new(*config);
        self.enumerate(&mut fields);
        !fields.is_empty()
    }
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn enumerate(&self, fields: &mut FieldList) {
        (**self).enumerate(fields)
    }
}

/// Enumerate `source` into an ordered list of entries.
pub fn enumerate_fields<T: FieldSource + ?Sized>(
    source: &T,
    config: &EnumerationConfig,
) -> Vec<Entry> {
    let mut fields = FieldList::new(*config);
    source.enumerate(&mut fields);
    fields.into_entries()
}

/// Whether `source` exposes any member under `config`.
pub fn has_fields<T: FieldSource + ?Sized>(source: &T, config: &EnumerationConfig) -> bool {
    source.has_fields(config)
}
