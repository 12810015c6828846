use thiserror::Error;

use sfs_index::IndexError;
use sfs_store::StoreError;
use sfs_types::ValidationError;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ReconcileError {
    /// Whether a section, entry or the backing text itself was missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            ReconcileError::Index(_) => true,
            ReconcileError::Store(e) => e.is_missing(),
            ReconcileError::Validation(_) => false,
        }
    }
}

pub type ReconcileResult<T> = Result<T, ReconcileError>;
