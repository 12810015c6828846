use async_trait::async_trait;

use crate::error::StoreResult;

/// Split stored text into lines.
///
/// Lines end at `\n`; a `\r` right before it is dropped. A final line without
/// a terminator is kept, and no empty line is produced for the final `\n`.
pub fn split_text(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Join lines into stored text, terminating each with `\n`.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for line in lines {
        text.push_str(line.as_ref());
        text.push('\n');
    }
    text
}

/// Blocking access to the backing text as a sequence of lines.
///
/// Implementations must satisfy these invariants:
/// - `read_lines` after `write_lines(lines)` returns `lines` unchanged,
///   provided no line contains a line break.
/// - `write_lines` replaces the whole content; `append_lines` adds to it.
/// - Nothing is held open between calls.
pub trait LineStore: Send + Sync {
    /// Read every line of the backing text.
    ///
    /// Returns `Err` when the text does not exist or cannot be read.
    fn read_lines(&self) -> StoreResult<Vec<String>>;

    /// Replace the backing text with `lines`.
    fn write_lines(&self, lines: &[String]) -> StoreResult<()>;

    /// Append `lines` to the backing text, creating it if needed.
    fn append_lines(&self, lines: &[String]) -> StoreResult<()>;

    /// Check whether the backing text exists.
    fn exists(&self) -> StoreResult<bool>;

    /// Read the lines, treating missing backing text as empty.
    fn read_lines_or_empty(&self) -> StoreResult<Vec<String>> {
        if self.exists()? {
            self.read_lines()
        } else {
            Ok(Vec::new())
        }
    }
}

/// Non-blocking twin of [`LineStore`].
///
/// Only the I/O boundary suspends; callers run indexing and conversion
/// synchronously on the returned lines.
#[async_trait]
pub trait AsyncLineStore: Send + Sync {
    async fn read_lines_async(&self) -> StoreResult<Vec<String>>;
    async fn write_lines_async(&self, lines: &[String]) -> StoreResult<()>;
    async fn append_lines_async(&self, lines: &[String]) -> StoreResult<()>;
    async fn exists_async(&self) -> StoreResult<bool>;

    async fn read_lines_or_empty_async(&self) -> StoreResult<Vec<String>> {
        if self.exists_async().await? {
            self.read_lines_async().await
        } else {
            Ok(Vec::new())
        }
    }
}

impl<T: LineStore + ?Sized> LineStore for &T {
    fn read_lines(&self) -> StoreResult<Vec<String>> {
        (**self).read_lines()
    }

    fn write_lines(&self, lines: &[String]) -> StoreResult<()> {
        (**self).write_lines(lines)
    }

    fn append_lines(&self, lines: &[String]) -> StoreResult<()> {
        (**self).append_lines(lines)
    }

    fn exists(&self) -> StoreResult<bool> {
        (**self).exists()
    }
}
