//! Turn collector: the barrier between producers and delivery.
//!
//! Producers resolving a turn may run as independent tasks. Each gets a
//! cloneable [`NotificationSender`] bound to an origin slot; every
//! submission is stamped with that slot and its position within it. The
//! single consumer receives in whatever order tasks happen to run, then
//! restores slot order before filling the [`NotificationQueue`], so
//! equal-code ties never depend on scheduling. [`TurnCollector::collect`]
//! finishes only after every sender has been dropped, so no submission can
//! race with the drain that follows.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use game_core::{NotificationQueue, TurnNotification};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::api::{Result, RuntimeError};

/// Notification plus the position it was submitted at.
struct Stamped<T> {
    origin: u32,
    sequence: u64,
    notification: T,
}

/// Cloneable producer-side handle.
///
/// Clones share the origin slot and its submission counter.
pub struct NotificationSender<T> {
    tx: mpsc::Sender<Stamped<T>>,
    origin: u32,
    sequence: Arc<AtomicU64>,
}

impl<T> Clone for NotificationSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            origin: self.origin,
            sequence: Arc::clone(&self.sequence),
        }
    }
}

impl<T: TurnNotification> NotificationSender<T> {
    /// Submits a notification, waiting while the channel is full.
    ///
    /// Fails with [`RuntimeError::CollectorClosed`] once the collector has
    /// been dropped.
    pub async fn submit(&self, notification: T) -> Result<()> {
        let kind = notification.kind();
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        self.tx
            .send(Stamped {
                origin: self.origin,
                sequence,
                notification,
            })
            .await
            .map_err(|_| RuntimeError::CollectorClosed)?;
        trace!(
            target: "runtime::collector",
            kind = %kind,
            code = kind.display_order(),
            origin = self.origin,
            sequence,
            "Notification submitted"
        );
        Ok(())
    }

    /// Slot this sender's submissions are ordered under.
    pub fn origin(&self) -> u32 {
        self.origin
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Single consumer gathering one turn's notifications.
pub struct TurnCollector<T> {
    tx: mpsc::Sender<Stamped<T>>,
    rx: mpsc::Receiver<Stamped<T>>,
    capacity: usize,
    next_origin: AtomicU32,
    sequences: Mutex<BTreeMap<u32, Arc<AtomicU64>>>,
}

impl<T: TurnNotification> TurnCollector<T> {
    /// Creates a collector whose channel buffers up to `capacity` items.
    ///
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, rx) = mpsc::channel(capacity);
        Self {
            tx,
            rx,
            capacity,
            next_origin: AtomicU32::new(0),
            sequences: Mutex::default(),
        }
    }

    /// Sender for a fresh origin slot, after every slot handed out so far.
    pub fn sender(&self) -> NotificationSender<T> {
        let origin = self.next_origin.fetch_add(1, Ordering::Relaxed);
        self.sender_for(origin)
    }

    /// Sender for an explicit origin slot.
    ///
    /// Senders for the same slot share one submission counter, so their
    /// notifications keep the order in which `submit` was called.
    pub fn sender_for(&self, origin: u32) -> NotificationSender<T> {
        self.next_origin
            .fetch_max(origin.saturating_add(1), Ordering::Relaxed);
        let sequence = {
            let mut sequences = self
                .sequences
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            Arc::clone(sequences.entry(origin).or_default())
        };
        NotificationSender {
            tx: self.tx.clone(),
            origin,
            sequence,
        }
    }

    /// Waits for every outstanding sender to drop, then returns the
    /// notifications ordered by origin slot and, within a slot, by
    /// submission.
    ///
    /// The channel is drained while waiting, so producers blocked on a full
    /// buffer make progress.
    pub async fn collect(self) -> NotificationQueue<T> {
        let Self {
            tx,
            mut rx,
            capacity,
            ..
        } = self;
        drop(tx);

        let mut received = Vec::with_capacity(capacity);
        while let Some(stamped) = rx.recv().await {
            received.push(stamped);
        }
        received.sort_by_key(|stamped| (stamped.origin, stamped.sequence));

        let queue: NotificationQueue<T> = received
            .into_iter()
            .map(|stamped| stamped.notification)
            .collect();
        debug!(
            target: "runtime::collector",
            collected = queue.len(),
            "All producers finished"
        );
        queue
    }
}
