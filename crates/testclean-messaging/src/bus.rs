//! In-process event bus
//!
//! An explicitly constructed, passed-in publisher collaborator. Handlers are
//! registered once during process startup, keyed by event name; there is no
//! ambient global registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::{debug, error, info};

use testclean_application::events::{EventPublisher, PublishError};
use testclean_domain::events::DomainEvent;
use testclean_domain::CompanyEvent;

/// A subscriber reacting to published domain events
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &str;

    /// Handle a single event
    async fn handle(&self, event: &CompanyEvent) -> Result<(), PublishError>;
}

/// In-process event bus dispatching events to handlers registered by event
/// name.
///
/// Safe for concurrent use; registration is expected at startup, publication
/// from any number of in-flight use cases afterwards.
pub struct InProcessEventBus {
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
    enabled: bool,
}

impl InProcessEventBus {
    /// Create an enabled bus
    pub fn new() -> Self {
        Self::with_enabled(true)
    }

    /// Create a bus honoring the configured event-bus toggle.
    ///
    /// A disabled bus accepts registrations and drops publications.
    pub fn with_enabled(enabled: bool) -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            enabled,
        }
    }

    /// Register a handler for an event name
    pub fn register(&self, event_name: &str, handler: Arc<dyn EventHandler>) {
        info!(
            event_name,
            handler = handler.name(),
            "registered event handler"
        );
        self.handlers
            .write()
            .unwrap()
            .entry(event_name.to_string())
            .or_default()
            .push(handler);
    }

    /// Number of handlers registered for an event name
    pub fn handler_count(&self, event_name: &str) -> usize {
        self.handlers
            .read()
            .unwrap()
            .get(event_name)
            .map_or(0, Vec::len)
    }
}

impl Default for InProcessEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InProcessEventBus {
    async fn publish(&self, event: &CompanyEvent) -> Result<(), PublishError> {
        if !self.enabled {
            debug!(
                event_name = event.event_name(),
                "event bus disabled, dropping event"
            );
            return Ok(());
        }

        let handlers = {
            let registry = self.handlers.read().unwrap();
            registry.get(event.event_name()).cloned().unwrap_or_default()
        };

        debug!(
            event_name = event.event_name(),
            handlers = handlers.len(),
            "dispatching event"
        );

        let mut failures = Vec::new();
        for handler in handlers {
            if let Err(e) = handler.handle(event).await {
                error!(
                    event_name = event.event_name(),
                    handler = handler.name(),
                    error = %e,
                    "event handler failed"
                );
                failures.push(format!("{}: {e}", handler.name()));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PublishError::HandlerFailed {
                event_name: event.event_name().to_string(),
                reason: failures.join("; "),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use testclean_domain::{CompanyCreated, CompanyId, CountryId};
    use uuid::Uuid;

    struct CountingHandler {
        seen: AtomicUsize,
    }

    impl CountingHandler {
        fn new() -> Self {
            Self {
                seen: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl EventHandler for CountingHandler {
        fn name(&self) -> &str {
            "counting"
        }

        async fn handle(&self, _event: &CompanyEvent) -> Result<(), PublishError> {
            self.seen.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct RejectingHandler;

    #[async_trait]
    impl EventHandler for RejectingHandler {
        fn name(&self) -> &str {
            "rejecting"
        }

        async fn handle(&self, _event: &CompanyEvent) -> Result<(), PublishError> {
            Err(PublishError::Unavailable("handler offline".into()))
        }
    }

    fn created_event() -> CompanyEvent {
        CompanyEvent::Created(CompanyCreated::new(
            CompanyId::new(),
            "Tech Solutions Inc.".to_string(),
            CountryId::from_uuid(Uuid::new_v4()),
        ))
    }

    #[tokio::test]
    async fn test_publish_reaches_registered_handler() {
        let bus = InProcessEventBus::new();
        let handler = Arc::new(CountingHandler::new());
        bus.register(CompanyCreated::EVENT_NAME, handler.clone());

        bus.publish(&created_event()).await.unwrap();

        assert_eq!(handler.seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_publish_without_handlers_succeeds() {
        let bus = InProcessEventBus::new();
        assert!(bus.publish(&created_event()).await.is_ok());
    }

    #[tokio::test]
    async fn test_disabled_bus_drops_events() {
        let bus = InProcessEventBus::with_enabled(false);
        let handler = Arc::new(CountingHandler::new());
        bus.register(CompanyCreated::EVENT_NAME, handler.clone());

        bus.publish(&created_event()).await.unwrap();

        assert_eq!(handler.seen.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_handler_failure_is_reported() {
        let bus = InProcessEventBus::new();
        let counting = Arc::new(CountingHandler::new());
        bus.register(CompanyCreated::EVENT_NAME, Arc::new(RejectingHandler));
        bus.register(CompanyCreated::EVENT_NAME, counting.clone());

        let result = bus.publish(&created_event()).await;

        // the failing handler does not stop delivery to the others
        assert!(matches!(result, Err(PublishError::HandlerFailed { .. })));
        assert_eq!(counting.seen.load(Ordering::SeqCst), 1);
    }
}
