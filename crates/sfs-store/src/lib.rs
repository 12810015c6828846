//! Line-sequence storage for the Section Field Store.
//!
//! The store is the I/O boundary of SFS: it loads the backing text as an
//! ordered sequence of lines and saves a sequence back. It knows nothing
//! about sections or entries.
//!
//! # Storage Backends
//!
//! All backends implement both [`LineStore`] and [`AsyncLineStore`]:
//!
//! - [`FileLineStore`] -- a single UTF-8 file on disk (`std::fs` / `tokio::fs`)
//! - [`InMemoryLineStore`] -- a `String` behind a `RwLock`, for tests and embedding
//!
//! # Design Rules
//!
//! 1. Lines are split on `\n` (a preceding `\r` is dropped); no trailing empty line.
//! 2. Every written line is terminated with `\n`.
//! 3. No backend keeps a file handle open between calls.
//! 4. No locking across calls: a read followed by a write is not atomic.
//! 5. All I/O errors are propagated unmodified, never silently ignored.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::FileLineStore;
pub use memory::InMemoryLineStore;
pub use traits::{join_lines, split_text, AsyncLineStore, LineStore};
