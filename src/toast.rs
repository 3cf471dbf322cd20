//! Transient notifications shown after a command completes.

use std::fmt;

use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::events::{Event, EventBus};

/// A success notification for a local change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    pub fn success(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    /// The toast an event produces, if any. Fetch results are shown by the
    /// list view itself, not as toasts.
    pub fn for_event(event: &Event) -> Option<Self> {
        match event {
            Event::UserAdded { .. } => Some(Self::success("User added successfully!")),
            Event::UserUpdated { .. } => Some(Self::success("User updated successfully!")),
            Event::UserDeleted { .. } => Some(Self::success("User deleted successfully!")),
            Event::UsersLoaded { .. } | Event::FetchFailed { .. } => None,
        }
    }
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ✓ {}", self.message)
    }
}

/// Collects toasts from the event bus until drained.
pub struct Toaster {
    rx: broadcast::Receiver<Event>,
}

impl Toaster {
    pub fn new(bus: &EventBus) -> Self {
        Self {
            rx: bus.subscribe(),
        }
    }

    /// Take every toast produced since the last drain.
    pub fn drain(&mut self) -> Vec<Toast> {
        let mut toasts = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => toasts.extend(Toast::for_event(&event)),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "toast receiver lagged");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        toasts
    }

    /// Print pending toasts.
    pub fn flush(&mut self) {
        for toast in self.drain() {
            println!("{toast}");
        }
    }
}
