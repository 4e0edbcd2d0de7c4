//! # Book Identifiers
//!
//! Ids are milliseconds since the Unix epoch at the moment a book is added.
//! [`generate_id`] is the bare clock reading. [`IdGenerator`] wraps a [`Clock`]
//! and never hands out the same value twice: when two books are added within
//! one millisecond (or the clock steps backwards) it moves past the last id.
//!
//! Because ids stay close to the creation time, the CLI can show how long ago
//! a book was added without storing a separate timestamp.

use crate::model::{Book, BookId};
use chrono::{DateTime, Utc};

/// Current time as a book id.
pub fn generate_id() -> BookId {
    BookId(SystemClock.now_millis())
}

/// Time at which a book with this id was created, if the id is a valid timestamp.
pub fn created_at(id: BookId) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(id.as_millis())
}

pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

pub struct IdGenerator<C: Clock = SystemClock> {
    clock: C,
    last: i64,
}

impl IdGenerator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for IdGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> IdGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            last: i64::MIN,
        }
    }

    /// Start above every id already present in `books`.
    pub fn seeded(mut self, books: &[Book]) -> Self {
        if let Some(max) = books.iter().map(|b| b.id.as_millis()).max() {
            self.last = self.last.max(max);
        }
        self
    }

    pub fn next_id(&mut self) -> BookId {
        let now = self.clock.now_millis();
        let id = if now > self.last {
            now
        } else {
            self.last.saturating_add(1)
        };
        self.last = id;
        BookId(id)
    }
}
