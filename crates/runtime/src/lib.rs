//! Runtime orchestration for end-of-turn notifications.
//!
//! This crate wires concurrent producers, the ordering queue and delivery
//! handlers into a turn-by-turn API. Consumers embed [`Runtime`], open a
//! [`TurnSession`] per turn and receive a [`DeliveryReport`] when it ends.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the handler trait, delivery context and errors
//! - [`collector`] is the barrier between producers and delivery
//! - [`dispatch`] presents drained notifications in order
//! - [`metrics`] keeps lock-free delivery counters
pub mod api;
pub mod collector;
pub mod dispatch;
pub mod metrics;
pub mod runtime;

pub use api::{
    DeliveryContext, FocusChange, HandlerCriticality, HandlerError, NotificationHandler, Result,
    RuntimeError,
};
pub use collector::{NotificationSender, TurnCollector};
pub use dispatch::{DeliveryFailure, DeliveryReport, Dispatcher, HandlerRegistry};
pub use metrics::{DeliveryMetrics, MetricsSnapshot};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig, TurnSession};
