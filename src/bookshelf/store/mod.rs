//! # Storage Layer
//!
//! The shelf is persisted as one text blob under one key. [`KeyValueStore`] is
//! the minimal contract a backend has to offer for that: read a key, write a
//! key, and report whether storage is usable at all.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One file per key: `{key}.json` inside the data directory
//!   - Writes are atomic (temp file, then rename)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate an unavailable store or failing writes
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/bookshelf/
//! ├── BOOKSHELF_APPS.json   # The whole shelf (JSON array of books)
//! └── config.json           # Configuration
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait KeyValueStore {
    /// Read the text stored under `key`. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `text` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, text: &str) -> Result<()>;

    /// Whether the store can be used at all.
    fn is_available(&self) -> bool;
}
