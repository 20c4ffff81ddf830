//! Public runtime API surface.
//!
//! Types exposed to handler authors and producers live here so the dispatch
//! and collection layers can stay focused on orchestration.

pub mod errors;
pub mod handler;

pub use errors::{HandlerError, Result, RuntimeError};
pub use handler::{DeliveryContext, FocusChange, HandlerCriticality, NotificationHandler};
