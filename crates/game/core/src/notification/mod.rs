//! End-of-turn notifications and the queue that orders them.
//!
//! Producers resolving a turn submit notifications in any order. When the
//! presentation layer advances the turn it drains the queue once and receives
//! every notification sorted by [`NotificationKind`] code, with submission
//! order preserved between notifications of the same code.

mod kind;
mod queue;

pub use kind::NotificationKind;
pub use queue::NotificationQueue;

/// Anything that can be queued for end-of-turn presentation.
///
/// The category alone decides where a notification lands in the drained
/// sequence and which code it is shown with; the rest of the value is opaque
/// to the queue.
pub trait TurnNotification {
    fn kind(&self) -> NotificationKind;
}

/// A notification category paired with a producer-owned payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notification<P> {
    kind: NotificationKind,
    payload: P,
}

impl<P> Notification<P> {
    pub const fn new(kind: NotificationKind, payload: P) -> Self {
        Self { kind, payload }
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P> TurnNotification for Notification<P> {
    fn kind(&self) -> NotificationKind {
        self.kind
    }
}

impl TurnNotification for NotificationKind {
    fn kind(&self) -> NotificationKind {
        *self
    }
}
