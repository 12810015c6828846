//! Tunables shared by every write path.

use serde::{Deserialize, Serialize};

use sfs_index::MatchMode;

/// How on-disk entries are combined with a writer's declared entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// On-disk entry `j` replaces declared entry `j`, names ignored.
    ///
    /// On-disk entries past the declared count are kept at the end.
    #[default]
    Positional,
    /// A declared entry takes the on-disk value stored under the same name.
    ///
    /// On-disk names the writer no longer declares are kept at the end.
    ByName,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcileOptions {
    /// Line matching used when a patch locates its entry.
    pub match_mode: MatchMode,
    pub merge_strategy: MergeStrategy,
}

impl ReconcileOptions {
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn with_merge_strategy(mut self, merge_strategy: MergeStrategy) -> Self {
        self.merge_strategy = merge_strategy;
        self
    }
}
