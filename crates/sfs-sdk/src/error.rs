use thiserror::Error;

use sfs_reconcile::ReconcileError;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("index error: {0}")]
    Index(#[from] sfs_index::IndexError),

    /// A stored value could not be converted to the requested type.
    #[error("cannot read {name:?} in section [{header}]: {source}")]
    Value {
        header: String,
        name: String,
        #[source]
        source: sfs_convert::ConvertError,
    },

    #[error("validation error: {0}")]
    Validation(#[from] sfs_types::ValidationError),

    #[error("store error: {0}")]
    Store(#[from] sfs_store::StoreError),

    #[error("config error: {0}")]
    Config(String),
}

impl SdkError {
    /// Whether the error means something was absent: a section, an entry,
    /// or the backing text.
    pub fn is_not_found(&self) -> bool {
        match self {
            SdkError::Index(_) => true,
            SdkError::Store(e) => e.is_missing(),
            _ => false,
        }
    }
}

impl SdkError {
    pub(crate) fn value(header: &str, name: &str, source: sfs_convert::ConvertError) -> Self {
        SdkError::Value {
            header: header.to_string(),
            name: name.to_string(),
            source,
        }
    }
}

impl From<ReconcileError> for SdkError {
    fn from(err: ReconcileError) -> Self {
        match err {
            ReconcileError::Index(e) => SdkError::Index(e),
            ReconcileError::Store(e) => SdkError::Store(e),
            ReconcileError::Validation(e) => SdkError::Validation(e),
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
