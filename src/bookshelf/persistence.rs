//! # Persistence Adapter
//!
//! Bridges the [`RecordStore`](crate::records::RecordStore) and a
//! [`KeyValueStore`]. The whole shelf is one JSON array stored under one key;
//! there is no per-book write and no schema version.
//!
//! Availability is checked once, when the adapter is built. If the store is
//! unusable the adapter keeps working but `save` and `load` do nothing, so
//! the session runs in memory only. The reason is queued as a warning that the
//! API layer hands to the user.

use crate::config::CorruptDataPolicy;
use crate::error::{Result, ShelfError};
use crate::events::{LogObserver, ShelfEvent, ShelfObserver};
use crate::model::Book;
use crate::store::KeyValueStore;
use tracing::{debug, warn};

pub struct Persistence<S: KeyValueStore> {
    store: S,
    key: String,
    on_corrupt: CorruptDataPolicy,
    available: bool,
    observers: Vec<Box<dyn ShelfObserver>>,
    warnings: Vec<String>,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        let available = store.is_available();
        let mut warnings = Vec::new();
        if !available {
            warn!("storage is not available, changes will not be saved");
            warnings.push(
                "Local storage is not available. Changes in this session will not be saved."
                    .to_string(),
            );
        }

        Self {
            store,
            key: key.into(),
            on_corrupt: CorruptDataPolicy::default(),
            available,
            observers: vec![Box::new(LogObserver)],
            warnings,
        }
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptDataPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn ShelfObserver>) {
        self.observers.push(observer);
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Warnings raised since the last call (unavailable storage, discarded data).
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    /// Write the full, ordered shelf under the storage key.
    pub fn save(&mut self, books: &[Book]) -> Result<()> {
        if !self.available {
            debug!("storage unavailable, skipping save");
            return Ok(());
        }

        let text = serde_json::to_string(books).map_err(ShelfError::Serialization)?;
        self.store.set(&self.key, &text)?;
        self.emit(ShelfEvent::Saved { count: books.len() });
        Ok(())
    }

    /// Read the shelf back. A missing key, empty text or `null` is an empty shelf.
    pub fn load(&mut self) -> Result<Vec<Book>> {
        let books = if self.available {
            self.read_books()?
        } else {
            Vec::new()
        };
        debug!(books = books.len(), key = %self.key, "shelf loaded");
        self.emit(ShelfEvent::RenderRequested);
        Ok(books)
    }

    fn read_books(&mut self) -> Result<Vec<Book>> {
        let text = match self.store.get(&self.key)? {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Ok(Vec::new()),
        };

        match serde_json::from_str::<Option<Vec<Book>>>(&text) {
            Ok(books) => Ok(books.unwrap_or_default()),
            Err(source) => match self.on_corrupt {
                CorruptDataPolicy::Fail => Err(ShelfError::CorruptData {
                    key: self.key.clone(),
                    source,
                }),
                CorruptDataPolicy::Discard => {
                    warn!(key = %self.key, error = %source, "discarding corrupt shelf data");
                    self.warnings.push(format!(
                        "Stored data under '{}' was unreadable and has been discarded.",
                        self.key
                    ));
                    Ok(Vec::new())
                }
            },
        }
    }

    fn emit(&self, event: ShelfEvent) {
        for observer in &self.observers {
            observer.notify(&event);
        }
    }
}
