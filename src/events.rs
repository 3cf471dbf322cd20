//! Decoupled event bus for cross-component communication.
//!
//! The session emits events via [`EventBus::emit`] after each state change;
//! the [`Toaster`](crate::toast::Toaster) and anything else interested
//! subscribe via [`EventBus::subscribe`]. Built on [`tokio::sync::broadcast`]
//! so multiple listeners can react independently.

use tokio::sync::broadcast;

use crate::user::User;

/// Events that flow through the system.
#[derive(Debug, Clone)]
pub enum Event {
    /// A fetch finished and replaced the list.
    UsersLoaded { count: usize },
    /// A fetch failed; the message is what the error panel shows.
    FetchFailed { message: String },
    UserAdded { user: User },
    UserUpdated { user: User },
    UserDeleted { user: User },
}

/// A broadcast channel that any component can emit to or subscribe from.
#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all current subscribers.
    /// Returns the number of receivers that will see it.
    pub fn emit(&self, event: Event) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Subscribe to events. Returns a receiver that yields all
    /// future events (does not replay past ones).
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
