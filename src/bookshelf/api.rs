//! # API Facade
//!
//! The API layer is the single entry point for shelf operations, whatever UI
//! drives them. It owns the session state: the [`RecordStore`], the
//! [`Persistence`] adapter and the [`IdGenerator`].
//!
//! ## The handler chain
//!
//! Every mutating call follows the same path:
//!
//! ```text
//! command (commands/*.rs) -> persist (if mutated) -> render (unfiltered)
//! ```
//!
//! Commands report whether they changed anything. An unknown id leaves the
//! shelf alone, so nothing is saved and no view is produced. Filtering never
//! saves and renders only the matching books.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::events::ShelfObserver;
use crate::id::{Clock, IdGenerator, SystemClock};
use crate::model::{Book, BookId, NewBook};
use crate::persistence::Persistence;
use crate::records::RecordStore;
use crate::render::render;
use crate::store::KeyValueStore;

pub struct ShelfApi<S: KeyValueStore, C: Clock = SystemClock> {
    records: RecordStore,
    persistence: Persistence<S>,
    ids: IdGenerator<C>,
    pending: Vec<CmdMessage>,
}

impl<S: KeyValueStore> ShelfApi<S, SystemClock> {
    /// Open the shelf kept in `store`, loading whatever was saved before.
    pub fn open(store: S, config: &ShelfConfig) -> Result<Self> {
        Self::open_with_clock(store, config, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ShelfApi<S, C> {
    pub fn open_with_clock(store: S, config: &ShelfConfig, clock: C) -> Result<Self> {
        let persistence = Persistence::new(store, config.storage_key.clone())
            .with_corrupt_policy(config.on_corrupt);
        Self::from_persistence(persistence, clock)
    }

    /// Open with a ready-made adapter, e.g. one with extra observers attached.
    pub fn from_persistence(mut persistence: Persistence<S>, clock: C) -> Result<Self> {
        let books = persistence.load()?;
        let ids = IdGenerator::with_clock(clock).seeded(&books);
        let pending = persistence
            .take_warnings()
            .into_iter()
            .map(CmdMessage::warning)
            .collect();

        Ok(Self {
            records: RecordStore::from(books),
            persistence,
            ids,
            pending,
        })
    }

    pub fn with_observer(mut self, observer: Box<dyn ShelfObserver>) -> Self {
        self.persistence.add_observer(observer);
        self
    }

    pub fn add_book(&mut self, book: NewBook) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.records, &mut self.ids, book)?;
        self.finish(result)
    }

    pub fn mark_complete(&mut self, id: BookId) -> Result<CmdResult> {
        let result = commands::completion::mark_complete(&mut self.records, id)?;
        self.finish(result)
    }

    pub fn mark_incomplete(&mut self, id: BookId) -> Result<CmdResult> {
        let result = commands::completion::mark_incomplete(&mut self.records, id)?;
        self.finish(result)
    }

    pub fn remove_book(&mut self, id: BookId) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.records, id)?;
        self.finish(result)
    }

    pub fn filter_books(&mut self, query: &str) -> Result<CmdResult> {
        let result = commands::filter::run(&self.records, query)?;
        self.finish(result)
    }

    pub fn list_books(&mut self) -> Result<CmdResult> {
        let result = commands::list::run(&self.records)?;
        self.finish(result)
    }

    pub fn books(&self) -> &[Book] {
        self.records.as_slice()
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Persist and re-render after a mutation, then attach queued warnings.
    fn finish(&mut self, mut result: CmdResult) -> Result<CmdResult> {
        if result.mutated {
            self.persistence.save(self.records.as_slice())?;
            result.view = Some(render(self.records.iter()));
        }

        if !self.pending.is_empty() {
            let mut messages = std::mem::take(&mut self.pending);
            messages.append(&mut result.messages);
            result.messages = messages;
        }
        Ok(result)
    }
}

pub fn config(paths: &ShelfPaths, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run(paths, action)
}

pub fn init(paths: &ShelfPaths) -> Result<CmdResult> {
    commands::init::run(paths)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, ShelfPaths};
