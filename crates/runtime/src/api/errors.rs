//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from producer tasks, the turn collector and delivery
//! handlers so clients can bubble them up with consistent context.
use game_core::NotificationKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Error returned by a [`NotificationHandler`](super::NotificationHandler).
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("turn collector closed before the notification was submitted")]
    CollectorClosed,

    #[error("critical handler {handler} failed on {kind}; {remaining} notifications undelivered")]
    HandlerFailed {
        handler: &'static str,
        kind: NotificationKind,
        remaining: usize,
        #[source]
        source: HandlerError,
    },

    #[error("producer {producer} join failed")]
    WorkerJoin {
        producer: String,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("runtime requires at least one notification handler or a fallback")]
    MissingHandlers,
}
