//! Transient user notifications.
//!
//! A LIFO single-slot queue with graceful exits: only the newest message is
//! meant to be read, but superseded messages finish their exit animation
//! instead of vanishing. The queue itself is pure state; the app owns the
//! timing (auto-dismiss, exit fade) through the scheduler.

use std::collections::VecDeque;

/// Identifier for a queued notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

/// What a notification says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    /// A product was added; reports the line's new quantity and shows the
    /// product image.
    Success { quantity: u32, image: String },
    /// The quantity cap was hit; no payload.
    Error,
}

/// Display phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fully visible.
    Active,
    /// Playing its exit animation; dropped when the fade delay elapses.
    Exiting,
}

/// A queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub phase: Phase,
}

/// Notification state, newest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    entries: VecDeque<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in display order (newest at the front).
    #[must_use]
    pub fn entries(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Whether nothing is displayed at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a new notification at the front, `Active`.
    pub fn push(&mut self, kind: NotificationKind) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.entries.push_front(Notification {
            id,
            kind,
            phase: Phase::Active,
        });
        id
    }

    /// Move every `Active` entry to `Exiting`; returns the ids that
    /// transitioned so the caller can schedule their drops. Entries already
    /// exiting keep their original drop schedule.
    pub fn begin_exit_all(&mut self) -> Vec<NotificationId> {
        let mut transitioned = Vec::new();
        for entry in &mut self.entries {
            if entry.phase == Phase::Active {
                entry.phase = Phase::Exiting;
                transitioned.push(entry.id);
            }
        }
        transitioned
    }

    /// Move one entry to `Exiting`. Returns whether it was active.
    pub fn begin_exit(&mut self, id: NotificationId) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) if entry.phase == Phase::Active => {
                entry.phase = Phase::Exiting;
                true
            }
            _ => false,
        }
    }

    /// Drop an entry outright. Called when a scheduled drop fires.
    pub fn remove(&mut self, id: NotificationId) {
        self.entries.retain(|entry| entry.id != id);
    }
}
