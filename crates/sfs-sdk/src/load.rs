//! Loading stored values back into an existing object.

use tracing::debug;

use sfs_convert::{convert, ConverterRegistry, FieldValue};
use sfs_index::{find_value_by_name_and_header, header_exists, MatchMode};

use crate::error::{SdkError, SdkResult};

/// A type whose members can be overwritten from stored values.
///
/// Each member is bound to a key and a header. Members whose header is
/// absent from the store keep their current value.
///
/// ```
/// use sfs_sdk::{FieldLoader, LoadFields, SdkResult};
///
/// struct Player {
///     lives: i32,
///     name: String,
/// }
///
/// impl LoadFields for Player {
///     fn load_fields(&mut self, loader: &mut FieldLoader<'_>) -> SdkResult<()> {
///         loader
///             .bind(&mut self.lives, "lives", "Player")?
///             .bind(&mut self.name, "name", "Profile")?;
///         Ok(())
///     }
/// }
/// ```
pub trait LoadFields {
    fn load_fields(&mut self, loader: &mut FieldLoader<'_>) -> SdkResult<()>;
}

/// Resolves member bindings against one snapshot of the store's lines.
#[derive(Debug)]
pub struct FieldLoader<'a> {
    lines: &'a [String],
    registry: &'a ConverterRegistry,
    mode: MatchMode,
    loaded: usize,
    skipped: usize,
}

impl<'a> FieldLoader<'a> {
    pub fn new(lines: &'a [String], registry: &'a ConverterRegistry, mode: MatchMode) -> Self {
        Self {
            lines,
            registry,
            mode,
            loaded: 0,
            skipped: 0,
        }
    }

    /// Overwrite `slot` with the value stored under `key` in `[header]`.
    ///
    /// A missing header leaves `slot` untouched. A present header without
    /// `key` fails with a not-found error.
    pub fn bind<T: FieldValue>(
        &mut self,
        slot: &mut T,
        key: &str,
        header: &str,
    ) -> SdkResult<&mut Self> {
        if !header_exists(self.lines, header) {
            debug!(header, key, "header absent, member skipped");
            self.skipped += 1;
            return Ok(self);
        }

        let raw = find_value_by_name_and_header(self.lines, header, key, self.mode)?;
        *slot = convert::<T>(&raw, self.registry).map_err(|e| SdkError::value(header, key, e))?;
        self.loaded += 1;
        Ok(self)
    }

    /// Members overwritten so far.
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// Members left untouched because their header was absent.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
