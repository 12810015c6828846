use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::traits::{join_lines, split_text, AsyncLineStore, LineStore};

/// In-memory line store.
///
/// Intended for tests and embedding. The backing text lives in a `String`
/// behind a `RwLock`; `None` models a file that does not exist yet, so reads
/// fail the same way a missing file does.
pub struct InMemoryLineStore {
    text: RwLock<Option<String>>,
}

impl InMemoryLineStore {
    /// Create a store with no backing text.
    pub fn new() -> Self {
        Self {
            text: RwLock::new(None),
        }
    }

    /// Create a store whose backing text is `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RwLock::new(Some(text.into())),
        }
    }

    /// Snapshot of the backing text, `None` if nothing was written yet.
    pub fn text(&self) -> StoreResult<Option<String>> {
        let text = self.text.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(text.clone())
    }

    /// Drop the backing text.
    pub fn clear(&self) -> StoreResult<()> {
        *self.text.write().map_err(|_| StoreError::LockPoisoned)? = None;
        Ok(())
    }
}

impl Default for InMemoryLineStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LineStore for InMemoryLineStore {
    fn read_lines(&self) -> StoreResult<Vec<String>> {
        let text = self.text.read().map_err(|_| StoreError::LockPoisoned)?;
        match text.as_deref() {
            Some(text) => Ok(split_text(text)),
            None => Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "in-memory store has no content",
            ))),
        }
    }

    fn write_lines(&self, lines: &[String]) -> StoreResult<()> {
        let mut text = self.text.write().map_err(|_| StoreError::LockPoisoned)?;
        *text = Some(join_lines(lines));
        Ok(())
    }

    fn append_lines(&self, lines: &[String]) -> StoreResult<()> {
        let mut text = self.text.write().map_err(|_| StoreError::LockPoisoned)?;
        text.get_or_insert_with(String::new).push_str(&join_lines(lines));
        Ok(())
    }

    fn exists(&self) -> StoreResult<bool> {
        let text = self.text.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(text.is_some())
    }
}

#[async_trait]
impl AsyncLineStore for InMemoryLineStore {
    async fn read_lines_async(&self) -> StoreResult<Vec<String>> {
        self.read_lines()
    }

    async fn write_lines_async(&self, lines: &[String]) -> StoreResult<()> {
        self.write_lines(lines)
    }

    async fn append_lines_async(&self, lines: &[String]) -> StoreResult<()> {
        self.append_lines(lines)
    }

    async fn exists_async(&self) -> StoreResult<bool> {
        self.exists()
    }
}

impl std::fmt::Debug for InMemoryLineStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self
            .text
            .read()
            .ok()
            .and_then(|t| t.as_ref().map(String::len));
        f.debug_struct("InMemoryLineStore")
            .field("text_len", &len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_store_has_no_content() {
        let store = InMemoryLineStore::new();
        assert!(!store.exists().unwrap());
        assert!(store.read_lines().unwrap_err().is_missing());
        assert_eq!(store.text().unwrap(), None);
    }

    #[test]
    fn with_text_splits_into_lines() {
        let store = InMemoryLineStore::with_text("[H]\nk: v\n[/H]\n\n");
        assert_eq!(store.read_lines().unwrap(), lines(&["[H]", "k: v", "[/H]", ""]));
    }

    #[test]
    fn write_is_byte_exact() {
        let store = InMemoryLineStore::new();
        store.write_lines(&lines(&["[H]", "[/H]", ""])).unwrap();
        assert_eq!(store.text().unwrap().as_deref(), Some("[H]\n[/H]\n\n"));
    }

    #[test]
    fn append_extends_existing_text() {
        let store = InMemoryLineStore::with_text("a\n");
        store.append_lines(&lines(&["b"])).unwrap();
        assert_eq!(store.read_lines().unwrap(), lines(&["a", "b"]));
    }

    #[test]
    fn append_creates_text() {
        let store = InMemoryLineStore::new();
        store.append_lines(&lines(&["x"])).unwrap();
        assert!(store.exists().unwrap());
    }

    #[test]
    fn clear_removes_text() {
        let store = InMemoryLineStore::with_text("a\n");
        store.clear().unwrap();
        assert!(!store.exists().unwrap());
        assert!(store.read_lines_or_empty().unwrap().is_empty());
    }

    #[test]
    fn shared_by_reference() {
        fn write_through<S: LineStore>(store: S) {
            store.write_lines(&lines(&["z"])).unwrap();
        }

        let store = InMemoryLineStore::new();
        write_through(&store);
        assert_eq!(store.read_lines().unwrap(), lines(&["z"]));
    }

    #[tokio::test]
    async fn async_matches_sync() {
        let store = InMemoryLineStore::new();
        store.write_lines_async(&lines(&["a"])).await.unwrap();
        store.append_lines_async(&lines(&["b"])).await.unwrap();
        assert!(store.exists_async().await.unwrap());
        assert_eq!(store.read_lines_async().await.unwrap(), store.read_lines().unwrap());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryLineStore::with_text("abc");
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryLineStore"));
        assert!(debug.contains("text_len"));
    }
}
