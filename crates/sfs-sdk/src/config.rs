use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use sfs_index::MatchMode;
use sfs_reconcile::{MergeStrategy, ReconcileOptions};
use sfs_types::EnumerationConfig;

use crate::error::{SdkError, SdkResult};

/// Configuration shared by readers and writers.
///
/// ```toml
/// match_mode = "exact"          # or "substring"
/// merge_strategy = "positional" # or "by_name"
///
/// [enumeration]
/// include_private = true
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SfsConfig {
    /// How entry lines are matched on lookup and patch.
    pub match_mode: MatchMode,
    /// How rewrite combines declared and on-disk entries.
    pub merge_strategy: MergeStrategy,
    /// Which members of a field source are written.
    pub enumeration: EnumerationConfig,
}

impl SfsConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> SdkResult<Self> {
        toml::from_str(text).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SdkError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> SdkResult<String> {
        toml::to_string(self).map_err(|e| SdkError::Config(e.to_string()))
    }

    pub fn reconcile_options(&self) -> ReconcileOptions {
        ReconcileOptions {
            match_mode: self.match_mode,
            merge_strategy: self.merge_strategy,
        }
    }
}
