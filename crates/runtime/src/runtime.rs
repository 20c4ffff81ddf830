//! High-level runtime orchestrator.
//!
//! The runtime owns the galaxy map, the handler registry and the turn
//! counter. Each turn is a [`TurnSession`]: producers submit through the
//! session's collector, and [`Runtime::end_turn`] waits for all of them
//! before draining and delivering in display order.

use std::future::Future;
use std::sync::Arc;

use game_core::{GalaxyMap, MapPolicy, TurnNotification};
use tokio::task::JoinHandle;
use tracing::{Instrument, debug_span, info, warn};

use crate::api::{NotificationHandler, Result, RuntimeError};
use crate::collector::{NotificationSender, TurnCollector};
use crate::dispatch::{DeliveryReport, Dispatcher, HandlerRegistry};
use crate::metrics::DeliveryMetrics;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Buffer size of the per-turn collector channel.
    pub collector_capacity: usize,
    /// Turn number of the first session.
    pub first_turn: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            collector_capacity: 64,
            first_turn: 1,
        }
    }
}

/// Main runtime that collects and delivers end-of-turn notifications.
pub struct Runtime<T: Send + Sync> {
    config: RuntimeConfig,
    dispatcher: Dispatcher<T>,
    map: GalaxyMap,
    turn: u32,
    metrics: Arc<DeliveryMetrics>,
}

impl<T> Runtime<T>
where
    T: TurnNotification + Send + Sync + 'static,
{
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder<T> {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Turn number the next session will resolve.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn map(&self) -> &GalaxyMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut GalaxyMap {
        &mut self.map
    }

    pub fn metrics(&self) -> Arc<DeliveryMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Opens collection for the current turn.
    pub fn begin_turn(&self) -> TurnSession<T> {
        TurnSession {
            turn: self.turn,
            collector: TurnCollector::new(self.config.collector_capacity),
            producers: Vec::new(),
        }
    }

    /// Closes the session, delivers its notifications and advances the turn.
    ///
    /// Waits until every sender handed out by the session has been dropped,
    /// then joins the session's producer tasks. The turn counter advances
    /// whenever the session is consumed: a producer that panicked discards
    /// the whole batch with [`RuntimeError::WorkerJoin`], and a failing
    /// critical handler drops the rest of the batch with
    /// [`RuntimeError::HandlerFailed`].
    pub async fn end_turn(&mut self, session: TurnSession<T>) -> Result<DeliveryReport> {
        let TurnSession {
            turn,
            collector,
            producers,
        } = session;

        let mut queue = collector.collect().await;
        let mut join_failure = None;
        for (producer, handle) in producers {
            if let Err(source) = handle.await {
                join_failure.get_or_insert(RuntimeError::WorkerJoin { producer, source });
            }
        }

        self.metrics.observe_batch(queue.len() as u64);
        self.turn = turn + 1;

        if let Some(error) = join_failure {
            self.metrics.record_abort();
            warn!(
                target: "runtime::dispatch",
                turn,
                discarded = queue.len(),
                error = %error,
                "Producer failed, turn discarded"
            );
            return Err(error);
        }

        let result = self
            .dispatcher
            .drain_and_deliver(&mut queue, &mut self.map, turn)
            .await;

        match &result {
            Ok(report) => {
                self.metrics.record_report(report);
                info!(
                    target: "runtime::dispatch",
                    turn,
                    delivered = report.delivered_count(),
                    skipped = report.skipped.len(),
                    failed = report.failures.len(),
                    "Turn delivered"
                );
            }
            Err(error) => {
                self.metrics.record_abort();
                warn!(target: "runtime::dispatch", turn, error = %error, "Turn delivery aborted");
            }
        }

        result
    }
}

/// Notifications gathered for one turn.
pub struct TurnSession<T> {
    turn: u32,
    collector: TurnCollector<T>,
    producers: Vec<(String, JoinHandle<()>)>,
}

impl<T> TurnSession<T>
where
    T: TurnNotification + Send + 'static,
{
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Sender for producers running outside the session.
    ///
    /// Each call opens a new origin slot after the ones already in use.
    /// [`Runtime::end_turn`] does not return until every sender is dropped.
    pub fn sender(&self) -> NotificationSender<T> {
        self.collector.sender()
    }

    /// Sender bound to origin slot `origin`.
    ///
    /// Equal-code notifications are delivered in slot order, then in
    /// submission order within a slot, however the producers are scheduled.
    pub fn sender_for(&self, origin: u32) -> NotificationSender<T> {
        self.collector.sender_for(origin)
    }

    /// Runs a producer as its own task in the next free origin slot; it is
    /// joined when the turn ends.
    pub fn spawn_producer<F, Fut>(&mut self, name: impl Into<String>, produce: F)
    where
        F: FnOnce(NotificationSender<T>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let sender = self.collector.sender();
        self.spawn_with(name.into(), sender, produce);
    }

    /// Like [`spawn_producer`](Self::spawn_producer), with an explicit
    /// origin slot, so launch order does not affect delivery order.
    pub fn spawn_producer_at<F, Fut>(&mut self, origin: u32, name: impl Into<String>, produce: F)
    where
        F: FnOnce(NotificationSender<T>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let sender = self.collector.sender_for(origin);
        self.spawn_with(name.into(), sender, produce);
    }

    fn spawn_with<F, Fut>(&mut self, name: String, sender: NotificationSender<T>, produce: F)
    where
        F: FnOnce(NotificationSender<T>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let span = debug_span!(
            "producer",
            producer = %name,
            origin = sender.origin(),
            turn = self.turn
        );
        let handle = tokio::spawn(produce(sender).instrument(span));
        self.producers.push((name, handle));
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder<T: Send + Sync> {
    config: RuntimeConfig,
    policy: MapPolicy,
    handlers: HandlerRegistry<T>,
}

impl<T> RuntimeBuilder<T>
where
    T: TurnNotification + Send + Sync + 'static,
{
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            policy: MapPolicy::default(),
            handlers: HandlerRegistry::new(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Presentation policy of the galaxy map handlers draw on.
    pub fn map_policy(mut self, policy: MapPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the handler registry wholesale.
    pub fn handlers(mut self, handlers: HandlerRegistry<T>) -> Self {
        self.handlers = handlers;
        self
    }

    /// Handler for categories without a dedicated one.
    pub fn fallback_handler(mut self, handler: impl NotificationHandler<T> + 'static) -> Self {
        self.handlers = self.handlers.with_fallback(handler);
        self
    }

    /// Build the runtime.
    ///
    /// Fails with [`RuntimeError::MissingHandlers`] when no handler could
    /// ever deliver a notification.
    pub fn build(self) -> Result<Runtime<T>> {
        if self.handlers.is_empty() {
            return Err(RuntimeError::MissingHandlers);
        }

        let dispatcher = Dispatcher::new(self.handlers);
        let registry = dispatcher.registry();
        info!(
            target: "runtime",
            first_turn = self.config.first_turn,
            dedicated = registry.dedicated_len(),
            kinds = ?registry.kinds(),
            fallback = registry.has_fallback(),
            "Runtime ready"
        );

        Ok(Runtime {
            turn: self.config.first_turn,
            config: self.config,
            dispatcher,
            map: GalaxyMap::new(self.policy),
            metrics: Arc::new(DeliveryMetrics::new()),
        })
    }
}
