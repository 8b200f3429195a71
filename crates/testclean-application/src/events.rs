//! Event publication port
//!
//! The use case layer publishes domain events through this port after a
//! successful save. Infrastructure provides implementations (in-process bus,
//! failover decorator); the doubles here support testing.

use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use testclean_domain::CompanyEvent;

/// Errors raised by event publication
#[derive(Error, Debug, Clone)]
pub enum PublishError {
    /// A registered handler rejected the event
    #[error("Handler failed for {event_name}: {reason}")]
    HandlerFailed { event_name: String, reason: String },

    /// The publishing collaborator is unreachable
    #[error("Publisher unavailable: {0}")]
    Unavailable(String),
}

/// Event publisher port.
///
/// Shared, stateless from the caller's perspective and safe for concurrent
/// use by multiple in-flight use cases.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single domain event
    async fn publish(&self, event: &CompanyEvent) -> Result<(), PublishError>;
}

/// No-op event publisher for testing
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: &CompanyEvent) -> Result<(), PublishError> {
        Ok(())
    }
}

/// In-memory event collector for testing
#[derive(Default)]
pub struct InMemoryEventPublisher {
    events: Mutex<Vec<CompanyEvent>>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all collected events in publication order
    pub fn events(&self) -> Vec<CompanyEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clear collected events
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: &CompanyEvent) -> Result<(), PublishError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}
