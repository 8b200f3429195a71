//! Domain events
//!
//! Domain events are immutable records of facts that occurred inside the
//! domain. They are produced by aggregate mutations, held in the aggregate's
//! pending list, and consumed exactly once by the orchestrating use case
//! after a successful save.

mod company;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use company::{CompanyCreated, CompanyEvent, CompanyUpdated};

/// Behavior shared by all domain events
pub trait DomainEvent {
    /// Unique identifier of this event instance
    fn event_id(&self) -> Uuid;

    /// Identifier of the aggregate that produced the event
    fn aggregate_id(&self) -> Uuid;

    /// When the fact occurred
    fn occurred_on(&self) -> DateTime<Utc>;

    /// Namespaced event name (`<org>.<service>.<version>.event.<resource>.<action>`)
    fn event_name(&self) -> &'static str;
}

/// Identity and timestamp shared by all domain events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event ID
    pub event_id: Uuid,

    /// When the event occurred
    pub occurred_on: DateTime<Utc>,
}

impl EventMetadata {
    /// Create metadata for a fact occurring now
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_on: Utc::now(),
        }
    }

    /// Rebuild metadata from transported identity and timestamp
    pub fn restore(event_id: Uuid, occurred_on: DateTime<Utc>) -> Self {
        Self {
            event_id,
            occurred_on,
        }
    }
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat wire payload of a serialized domain event
pub type EventPayload = BTreeMap<String, String>;

pub(crate) fn payload_field<'a>(
    payload: &'a EventPayload,
    field: &str,
) -> crate::errors::DomainResult<&'a str> {
    payload.get(field).map(String::as_str).ok_or_else(|| {
        crate::errors::DomainError::EventDeserializationFailed {
            reason: format!("missing field '{field}'"),
        }
    })
}
