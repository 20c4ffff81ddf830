//! Per-turn notification queue.

use super::TurnNotification;

/// Unordered collection of notifications for one turn.
///
/// [`submit`](Self::submit) appends; [`drain`](Self::drain) returns everything
/// sorted by display-order code and leaves the queue empty. The sort is
/// stable, so equal codes come out in submission order.
#[derive(Clone, Debug)]
pub struct NotificationQueue<T> {
    pending: Vec<T>,
}

impl<T> Default for NotificationQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NotificationQueue<T> {
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending notifications in submission order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.pending.iter()
    }
}

impl<T: TurnNotification> NotificationQueue<T> {
    /// Appends a notification. Never fails.
    pub fn submit(&mut self, notification: T) {
        self.pending.push(notification);
    }

    /// Takes every pending notification in presentation order.
    pub fn drain(&mut self) -> Vec<T> {
        let mut batch = std::mem::take(&mut self.pending);
        // `sort_by_key` is stable: ties keep submission order.
        batch.sort_by_key(|notification| notification.kind().priority());
        batch
    }

    /// Iterator form of [`drain`](Self::drain).
    pub fn drain_sorted(&mut self) -> std::vec::IntoIter<T> {
        self.drain().into_iter()
    }
}

impl<T: TurnNotification> Extend<T> for NotificationQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for notification in iter {
            self.submit(notification);
        }
    }
}

impl<T: TurnNotification> FromIterator<T> for NotificationQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
