//! Delivery handlers invoked for each drained notification.

use async_trait::async_trait;
use game_core::{GalaxyMap, Location, MappedObject, NotificationKind};
use serde::Serialize;

use super::HandlerError;

/// Defines the criticality level of a handler for error handling.
///
/// - Critical handlers must succeed or the rest of the batch is dropped
/// - Important handlers log errors but allow delivery to continue
/// - Optional handlers can fail quietly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerCriticality {
    /// Failure aborts delivery; remaining notifications are not shown.
    Critical,

    /// Failure is logged as an error and delivery continues.
    #[default]
    Important,

    /// Failure is logged at debug level.
    ///
    /// Use for cosmetic effects (sounds, animations) that the player can miss.
    Optional,
}

impl HandlerCriticality {
    pub const fn as_str(self) -> &'static str {
        match self {
            HandlerCriticality::Critical => "critical",
            HandlerCriticality::Important => "important",
            HandlerCriticality::Optional => "optional",
        }
    }
}

/// Presents one notification to the player.
///
/// Handlers run strictly in drained order on the delivering task, one at a
/// time, so a handler may freely mutate the map through the context.
#[async_trait]
pub trait NotificationHandler<T: Send + Sync>: Send + Sync {
    /// Returns a human-readable name for this handler (used in logging).
    fn name(&self) -> &'static str;

    fn criticality(&self) -> HandlerCriticality {
        HandlerCriticality::Important
    }

    async fn notify_player(
        &self,
        notification: &T,
        ctx: &mut DeliveryContext<'_>,
    ) -> Result<(), HandlerError>;
}

/// A map recentering performed while delivering a notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FocusChange {
    pub kind: NotificationKind,
    pub location: Location,
}

/// State a handler may touch while presenting a notification.
pub struct DeliveryContext<'a> {
    map: &'a mut GalaxyMap,
    turn: u32,
    current: NotificationKind,
    focus_changes: Vec<FocusChange>,
}

impl<'a> DeliveryContext<'a> {
    pub(crate) fn new(map: &'a mut GalaxyMap, turn: u32) -> Self {
        Self {
            map,
            turn,
            current: NotificationKind::SystemsScouted,
            focus_changes: Vec::new(),
        }
    }

    pub(crate) fn begin(&mut self, kind: NotificationKind) {
        self.current = kind;
    }

    pub(crate) fn into_focus_changes(self) -> Vec<FocusChange> {
        self.focus_changes
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Category of the notification being delivered.
    pub fn kind(&self) -> NotificationKind {
        self.current
    }

    pub fn map(&self) -> &GalaxyMap {
        self.map
    }

    pub fn map_mut(&mut self) -> &mut GalaxyMap {
        self.map
    }

    /// Centers the map on `object` and records the move.
    pub fn request_focus(&mut self, object: &impl MappedObject) {
        self.map.focus_on(object);
        self.focus_changes.push(FocusChange {
            kind: self.current,
            location: object.location(),
        });
    }
}
