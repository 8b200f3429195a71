//! Local failover store for undeliverable events
//!
//! When the inner publisher rejects an event, the decorator parks the
//! serialized event in a local holding area so it can be retried later. The
//! business fact is already committed by then; losing the broadcast is
//! acceptable, losing it silently is not.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use testclean_application::events::{EventPublisher, PublishError};
use testclean_domain::events::{DomainEvent, EventPayload};
use testclean_domain::{CompanyEvent, DomainResult};

/// A serialized event parked for later redelivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEvent {
    pub event_name: String,
    pub event_id: Uuid,
    pub occurred_on: DateTime<Utc>,
    pub payload: EventPayload,
}

impl StoredEvent {
    /// Park an event in transportable form
    pub fn from_event(event: &CompanyEvent) -> Self {
        Self {
            event_name: event.event_name().to_string(),
            event_id: event.event_id(),
            occurred_on: event.occurred_on(),
            payload: event.serialize(),
        }
    }

    /// Rebuild the domain event for redelivery
    pub fn into_event(self) -> DomainResult<CompanyEvent> {
        CompanyEvent::deserialize(
            &self.event_name,
            self.event_id,
            self.occurred_on,
            &self.payload,
        )
    }
}

/// In-memory holding area for events that could not be published
#[derive(Default)]
pub struct FailoverEventStore {
    entries: Mutex<Vec<StoredEvent>>,
}

impl FailoverEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park an event
    pub fn push(&self, event: &CompanyEvent) {
        self.entries
            .lock()
            .unwrap()
            .push(StoredEvent::from_event(event));
    }

    /// Take all parked events, leaving the store empty
    pub fn drain(&self) -> Vec<StoredEvent> {
        self.entries.lock().unwrap().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

/// Publisher decorator that parks undeliverable events in a failover store.
///
/// The publication error still propagates to the caller (which logs and
/// swallows it); the decorator's job is making the event recoverable.
pub struct FailoverPublisher<P: EventPublisher> {
    inner: Arc<P>,
    store: Arc<FailoverEventStore>,
}

impl<P: EventPublisher> FailoverPublisher<P> {
    pub fn new(inner: Arc<P>, store: Arc<FailoverEventStore>) -> Self {
        Self { inner, store }
    }

    /// Retry every parked event once, re-parking those that fail again.
    ///
    /// Returns the number of events delivered.
    pub async fn retry_parked(&self) -> usize {
        let parked = self.store.drain();
        let mut delivered = 0;

        for stored in parked {
            let event = match stored.clone().into_event() {
                Ok(event) => event,
                Err(e) => {
                    warn!(
                        event_name = %stored.event_name,
                        error = %e,
                        "parked event could not be rebuilt, dropping"
                    );
                    continue;
                }
            };

            match self.inner.publish(&event).await {
                Ok(()) => {
                    delivered += 1;
                    info!(event_name = %stored.event_name, "redelivered parked event");
                }
                Err(_) => self.store.push(&event),
            }
        }

        delivered
    }
}

#[async_trait]
impl<P: EventPublisher> EventPublisher for FailoverPublisher<P> {
    async fn publish(&self, event: &CompanyEvent) -> Result<(), PublishError> {
        match self.inner.publish(event).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(
                    event_name = event.event_name(),
                    error = %e,
                    "publication failed, parking event in failover store"
                );
                self.store.push(event);
                Err(e)
            }
        }
    }
}
