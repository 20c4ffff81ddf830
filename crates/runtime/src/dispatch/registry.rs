//! Handler registry keyed by notification category.

use std::collections::HashMap;
use std::sync::Arc;

use game_core::NotificationKind;

use crate::api::NotificationHandler;

/// Maps each category to the handler that presents it.
///
/// Categories without a dedicated handler go to the fallback when one is set;
/// otherwise they are skipped at delivery time.
pub struct HandlerRegistry<T: Send + Sync> {
    handlers: HashMap<NotificationKind, Arc<dyn NotificationHandler<T>>>,
    fallback: Option<Arc<dyn NotificationHandler<T>>>,
}

impl<T: Send + Sync> HandlerRegistry<T> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: None,
        }
    }

    /// Registers `handler` for `kind`, replacing any previous handler.
    pub fn register(
        mut self,
        kind: NotificationKind,
        handler: impl NotificationHandler<T> + 'static,
    ) -> Self {
        self.handlers.insert(kind, Arc::new(handler));
        self
    }

    /// Handler used for categories that have none of their own.
    pub fn with_fallback(mut self, handler: impl NotificationHandler<T> + 'static) -> Self {
        self.fallback = Some(Arc::new(handler));
        self
    }

    pub fn handler_for(&self, kind: NotificationKind) -> Option<&Arc<dyn NotificationHandler<T>>> {
        self.handlers.get(&kind).or(self.fallback.as_ref())
    }

    /// Number of categories with a dedicated handler; the fallback is not
    /// counted.
    pub fn dedicated_len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if neither dedicated handlers nor a fallback are set.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty() && self.fallback.is_none()
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Categories with a dedicated handler, in display order (for debugging).
    pub fn kinds(&self) -> Vec<NotificationKind> {
        let mut kinds: Vec<_> = self.handlers.keys().copied().collect();
        kinds.sort();
        kinds
    }
}

impl<T: Send + Sync> Default for HandlerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
