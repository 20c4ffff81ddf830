//! Summary of one turn's delivery.

use std::collections::BTreeMap;

use game_core::NotificationKind;
use serde::Serialize;

use crate::api::{FocusChange, HandlerCriticality};

/// A non-critical handler failure that delivery recovered from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryFailure {
    pub kind: NotificationKind,
    pub handler: &'static str,
    pub criticality: HandlerCriticality,
    pub error: String,
}

/// What happened while presenting one drained batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeliveryReport {
    pub turn: u32,
    /// Categories delivered successfully, in presentation order.
    pub delivered: Vec<NotificationKind>,
    pub per_kind: BTreeMap<NotificationKind, usize>,
    /// Categories that had no handler.
    pub skipped: Vec<NotificationKind>,
    pub failures: Vec<DeliveryFailure>,
    pub focus_changes: Vec<FocusChange>,
}

impl DeliveryReport {
    pub fn new(turn: u32) -> Self {
        Self {
            turn,
            ..Self::default()
        }
    }

    pub(crate) fn record_delivered(&mut self, kind: NotificationKind) {
        self.delivered.push(kind);
        *self.per_kind.entry(kind).or_default() += 1;
    }

    pub fn delivered_count(&self) -> usize {
        self.delivered.len()
    }

    /// Notifications that reached the dispatcher, whether or not they were shown.
    pub fn batch_size(&self) -> usize {
        self.delivered.len() + self.skipped.len() + self.failures.len()
    }

    /// True when every notification was delivered without failure.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.failures.is_empty()
    }
}
