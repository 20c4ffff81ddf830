//! Scripted turn scenarios.
//!
//! A scenario lists the notifications each producer emits during one turn.
//! Producers are independent: the runtime may run them concurrently, and
//! the drained order must not depend on how they interleave.

use game_core::{Location, NotificationKind, TurnNotification};
use serde::{Deserialize, Serialize};

/// One scripted turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Turn number being resolved (one-based).
    pub turn: u32,
    /// Seed for any random draws made while resolving the turn.
    #[serde(default)]
    pub seed: u64,
    pub producers: Vec<ProducerScript>,
}

impl Scenario {
    /// Total notifications across all producers.
    pub fn notification_count(&self) -> usize {
        self.producers.iter().map(|p| p.notifications.len()).sum()
    }
}

/// Notifications emitted by one turn-resolution subsystem, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProducerScript {
    pub name: String,
    #[serde(default)]
    pub notifications: Vec<ScriptedNotification>,
}

/// A notification with a player-facing message and an optional map focus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedNotification {
    pub kind: NotificationKind,
    pub message: String,
    /// Where the map should center while this notification is shown.
    #[serde(default)]
    pub focus: Option<Location>,
}

impl ScriptedNotification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            focus: None,
        }
    }

    pub fn with_focus(mut self, focus: Location) -> Self {
        self.focus = Some(focus);
        self
    }
}

impl TurnNotification for ScriptedNotification {
    fn kind(&self) -> NotificationKind {
        self.kind
    }
}
