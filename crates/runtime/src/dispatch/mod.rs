//! Ordered delivery of drained notifications.
//!
//! The dispatcher drains a [`NotificationQueue`] once and hands each
//! notification, in drained order, to the handler registered for its
//! category. Handlers run one at a time on the caller's task.
//!
//! # Error Handling
//!
//! Handler failures are handled based on criticality level:
//! - `Critical`: Returns error immediately; later notifications are dropped
//! - `Important`: Logs error and continues with the next notification
//! - `Optional`: Logs at debug level and continues

mod registry;
mod report;

pub use registry::HandlerRegistry;
pub use report::{DeliveryFailure, DeliveryReport};

use game_core::{GalaxyMap, NotificationKind, NotificationQueue, TurnNotification};
use tracing::{debug, error, warn};

use crate::api::{
    DeliveryContext, HandlerCriticality, HandlerError, NotificationHandler, Result, RuntimeError,
};

/// Presents drained notifications through a [`HandlerRegistry`].
pub struct Dispatcher<T: Send + Sync> {
    registry: HandlerRegistry<T>,
}

impl<T: TurnNotification + Send + Sync> Dispatcher<T> {
    pub fn new(registry: HandlerRegistry<T>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &HandlerRegistry<T> {
        &self.registry
    }

    /// Drains `queue` and delivers the result.
    ///
    /// The queue is empty afterwards even if a critical handler fails.
    pub async fn drain_and_deliver(
        &self,
        queue: &mut NotificationQueue<T>,
        map: &mut GalaxyMap,
        turn: u32,
    ) -> Result<DeliveryReport> {
        let batch = queue.drain();
        self.deliver(&batch, map, turn).await
    }

    /// Delivers an already ordered batch.
    pub async fn deliver(
        &self,
        batch: &[T],
        map: &mut GalaxyMap,
        turn: u32,
    ) -> Result<DeliveryReport> {
        let mut report = DeliveryReport::new(turn);
        let mut ctx = DeliveryContext::new(map, turn);

        for (index, notification) in batch.iter().enumerate() {
            let kind = notification.kind();
            let Some(handler) = self.registry.handler_for(kind) else {
                warn!(
                    target: "runtime::dispatch",
                    kind = %kind,
                    code = kind.display_order(),
                    turn,
                    "No handler registered, skipping notification"
                );
                report.skipped.push(kind);
                continue;
            };

            ctx.begin(kind);
            match handler.notify_player(notification, &mut ctx).await {
                Ok(()) => {
                    debug!(
                        target: "runtime::dispatch",
                        kind = %kind,
                        code = kind.display_order(),
                        turn,
                        handler = handler.name(),
                        "Notification delivered"
                    );
                    report.record_delivered(kind);
                }
                Err(error) => {
                    let remaining = batch.len() - index - 1;
                    Self::handle_failure(handler.as_ref(), kind, error, remaining, &mut report)?;
                }
            }
        }

        report.focus_changes = ctx.into_focus_changes();
        Ok(report)
    }

    /// Handles handler errors based on criticality level.
    ///
    /// Returns Ok(()) for Important/Optional handlers, Err for Critical ones.
    fn handle_failure(
        handler: &dyn NotificationHandler<T>,
        kind: NotificationKind,
        error: HandlerError,
        remaining: usize,
        report: &mut DeliveryReport,
    ) -> Result<()> {
        let criticality = handler.criticality();
        match criticality {
            HandlerCriticality::Critical => {
                error!(
                    target: "runtime::dispatch",
                    handler = handler.name(),
                    kind = %kind,
                    criticality = criticality.as_str(),
                    remaining,
                    error = %error,
                    "Critical handler failed, aborting delivery"
                );
                return Err(RuntimeError::HandlerFailed {
                    handler: handler.name(),
                    kind,
                    remaining,
                    source: error,
                });
            }
            HandlerCriticality::Important => error!(
                target: "runtime::dispatch",
                handler = handler.name(),
                kind = %kind,
                criticality = criticality.as_str(),
                error = %error,
                "Handler failed, continuing"
            ),
            HandlerCriticality::Optional => debug!(
                target: "runtime::dispatch",
                handler = handler.name(),
                kind = %kind,
                criticality = criticality.as_str(),
                error = %error,
                "Optional handler failed"
            ),
        }

        report.failures.push(DeliveryFailure {
            kind,
            handler: handler.name(),
            criticality,
            error: error.to_string(),
        });
        Ok(())
    }
}
