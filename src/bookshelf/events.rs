//! Notifications emitted by the persistence layer.
//!
//! Observers are fire-and-forget: they cannot fail and cannot change the
//! outcome of the operation that notified them.

use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfEvent {
    /// The shelf was written to storage.
    Saved { count: usize },
    /// The shelf was loaded and should be shown.
    RenderRequested,
}

pub trait ShelfObserver {
    fn notify(&self, event: &ShelfEvent);
}

/// Writes every event to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ShelfObserver for LogObserver {
    fn notify(&self, event: &ShelfEvent) {
        match event {
            ShelfEvent::Saved { count } => info!(books = count, "data saved"),
            ShelfEvent::RenderRequested => debug!("render requested"),
        }
    }
}

/// Records events for inspection in tests.
#[cfg(test)]
#[derive(Default, Clone)]
pub(crate) struct RecordingObserver {
    pub events: std::rc::Rc<std::cell::RefCell<Vec<ShelfEvent>>>,
}

#[cfg(test)]
impl ShelfObserver for RecordingObserver {
    fn notify(&self, event: &ShelfEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
