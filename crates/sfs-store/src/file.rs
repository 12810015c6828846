use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::StoreResult;
use crate::traits::{join_lines, split_text, AsyncLineStore, LineStore};

/// Line store backed by a single UTF-8 file.
///
/// Every call opens, reads or writes, and closes the file. Missing parent
/// directories are created on write.
#[derive(Clone, Debug)]
pub struct FileLineStore {
    path: PathBuf,
}

impl FileLineStore {
    /// Create a store for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    async fn ensure_parent_async(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }
}

impl LineStore for FileLineStore {
    fn read_lines(&self) -> StoreResult<Vec<String>> {
        let text = fs::read_to_string(&self.path)?;
        let lines = split_text(&text);
        debug!(path = %self.path.display(), lines = lines.len(), "read lines");
        Ok(lines)
    }

    fn write_lines(&self, lines: &[String]) -> StoreResult<()> {
        self.ensure_parent()?;
        fs::write(&self.path, join_lines(lines))?;
        debug!(path = %self.path.display(), lines = lines.len(), "wrote lines");
        Ok(())
    }

    fn append_lines(&self, lines: &[String]) -> StoreResult<()> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(join_lines(lines).as_bytes())?;
        file.flush()?;
        debug!(path = %self.path.display(), lines = lines.len(), "appended lines");
        Ok(())
    }

    fn exists(&self) -> StoreResult<bool> {
        Ok(self.path.try_exists()?)
    }
}

#[async_trait]
impl AsyncLineStore for FileLineStore {
    async fn read_lines_async(&self) -> StoreResult<Vec<String>> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let lines = split_text(&text);
        debug!(path = %self.path.display(), lines = lines.len(), "read lines (async)");
        Ok(lines)
    }

    async fn write_lines_async(&self, lines: &[String]) -> StoreResult<()> {
        self.ensure_parent_async().await?;
        tokio::fs::write(&self.path, join_lines(lines)).await?;
        debug!(path = %self.path.display(), lines = lines.len(), "wrote lines (async)");
        Ok(())
    }

    async fn append_lines_async(&self, lines: &[String]) -> StoreResult<()> {
        self.ensure_parent_async().await?;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(join_lines(lines).as_bytes()).await?;
        file.flush().await?;
        debug!(path = %self.path.display(), lines = lines.len(), "appended lines (async)");
        Ok(())
    }

    async fn exists_async(&self) -> StoreResult<bool> {
        Ok(tokio::fs::try_exists(&self.path).await?)
    }
}
