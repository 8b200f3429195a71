//! Company aggregate domain events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{payload_field, DomainEvent, EventMetadata, EventPayload};
use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{CompanyId, CountryId};

/// Event emitted when a company is created
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyCreated {
    /// Event metadata
    pub metadata: EventMetadata,

    /// Company aggregate ID
    pub company_id: CompanyId,

    /// Name of the created company
    pub company_name: String,

    /// Country where the company is registered
    pub country_id: CountryId,
}

impl CompanyCreated {
    pub const EVENT_NAME: &'static str = "testclean.api.1.event.company.created";

    /// Create new CompanyCreated event
    pub fn new(company_id: CompanyId, company_name: String, country_id: CountryId) -> Self {
        Self {
            metadata: EventMetadata::new(),
            company_id,
            company_name,
            country_id,
        }
    }

    /// Serialize to a flat mapping of primitive fields suitable for transport
    pub fn serialize(&self) -> EventPayload {
        let mut payload = EventPayload::new();
        payload.insert("event_name".to_string(), Self::EVENT_NAME.to_string());
        payload.insert("event_id".to_string(), self.metadata.event_id.to_string());
        payload.insert(
            "occurred_on".to_string(),
            self.metadata.occurred_on.to_rfc3339(),
        );
        payload.insert("company_id".to_string(), self.company_id.to_string());
        payload.insert("company_name".to_string(), self.company_name.clone());
        payload.insert("country_id".to_string(), self.country_id.to_string());
        payload
    }

    /// Rebuild the event from transported identity, timestamp and payload.
    ///
    /// Exact left inverse of [`CompanyCreated::serialize`].
    pub fn deserialize(
        event_id: Uuid,
        occurred_on: DateTime<Utc>,
        payload: &EventPayload,
    ) -> DomainResult<Self> {
        Ok(Self {
            metadata: EventMetadata::restore(event_id, occurred_on),
            company_id: parse_company_id(payload_field(payload, "company_id")?)?,
            company_name: payload_field(payload, "company_name")?.to_string(),
            country_id: parse_country_id(payload_field(payload, "country_id")?)?,
        })
    }
}

impl DomainEvent for CompanyCreated {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.company_id.as_uuid()
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.metadata.occurred_on
    }

    fn event_name(&self) -> &'static str {
        Self::EVENT_NAME
    }
}

/// Event emitted when a company is updated.
///
/// The payload carries the resulting state of the company, not a diff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyUpdated {
    /// Event metadata
    pub metadata: EventMetadata,

    /// Company aggregate ID
    pub company_id: CompanyId,

    /// Company name after the update
    pub company_name: String,

    /// Country after the update
    pub country_id: CountryId,
}

impl CompanyUpdated {
    pub const EVENT_NAME: &'static str = "testclean.api.1.event.company.updated";

    /// Create new CompanyUpdated event
    pub fn new(company_id: CompanyId, company_name: String, country_id: CountryId) -> Self {
        Self {
            metadata: EventMetadata::new(),
            company_id,
            company_name,
            country_id,
        }
    }

    /// Serialize to a flat mapping of primitive fields suitable for transport
    pub fn serialize(&self) -> EventPayload {
        let mut payload = EventPayload::new();
        payload.insert("event_name".to_string(), Self::EVENT_NAME.to_string());
        payload.insert("event_id".to_string(), self.metadata.event_id.to_string());
        payload.insert(
            "occurred_on".to_string(),
            self.metadata.occurred_on.to_rfc3339(),
        );
        payload.insert("company_id".to_string(), self.company_id.to_string());
        payload.insert("company_name".to_string(), self.company_name.clone());
        payload.insert("country_id".to_string(), self.country_id.to_string());
        payload
    }

    /// Rebuild the event from transported identity, timestamp and payload.
    ///
    /// Exact left inverse of [`CompanyUpdated::serialize`].
    pub fn deserialize(
        event_id: Uuid,
        occurred_on: DateTime<Utc>,
        payload: &EventPayload,
    ) -> DomainResult<Self> {
        Ok(Self {
            metadata: EventMetadata::restore(event_id, occurred_on),
            company_id: parse_company_id(payload_field(payload, "company_id")?)?,
            company_name: payload_field(payload, "company_name")?.to_string(),
            country_id: parse_country_id(payload_field(payload, "country_id")?)?,
        })
    }
}

impl DomainEvent for CompanyUpdated {
    fn event_id(&self) -> Uuid {
        self.metadata.event_id
    }

    fn aggregate_id(&self) -> Uuid {
        self.company_id.as_uuid()
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        self.metadata.occurred_on
    }

    fn event_name(&self) -> &'static str {
        Self::EVENT_NAME
    }
}

/// All events the company aggregate can record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompanyEvent {
    Created(CompanyCreated),
    Updated(CompanyUpdated),
}

impl CompanyEvent {
    /// Serialize to a flat mapping of primitive fields suitable for transport
    pub fn serialize(&self) -> EventPayload {
        match self {
            CompanyEvent::Created(event) => event.serialize(),
            CompanyEvent::Updated(event) => event.serialize(),
        }
    }

    /// Rebuild an event from its transported name, identity, timestamp and
    /// payload
    pub fn deserialize(
        event_name: &str,
        event_id: Uuid,
        occurred_on: DateTime<Utc>,
        payload: &EventPayload,
    ) -> DomainResult<Self> {
        match event_name {
            CompanyCreated::EVENT_NAME => Ok(CompanyEvent::Created(CompanyCreated::deserialize(
                event_id,
                occurred_on,
                payload,
            )?)),
            CompanyUpdated::EVENT_NAME => Ok(CompanyEvent::Updated(CompanyUpdated::deserialize(
                event_id,
                occurred_on,
                payload,
            )?)),
            other => Err(DomainError::EventDeserializationFailed {
                reason: format!("unknown event name '{other}'"),
            }),
        }
    }
}

impl DomainEvent for CompanyEvent {
    fn event_id(&self) -> Uuid {
        match self {
            CompanyEvent::Created(event) => event.event_id(),
            CompanyEvent::Updated(event) => event.event_id(),
        }
    }

    fn aggregate_id(&self) -> Uuid {
        match self {
            CompanyEvent::Created(event) => event.aggregate_id(),
            CompanyEvent::Updated(event) => event.aggregate_id(),
        }
    }

    fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            CompanyEvent::Created(event) => event.occurred_on(),
            CompanyEvent::Updated(event) => event.occurred_on(),
        }
    }

    fn event_name(&self) -> &'static str {
        match self {
            CompanyEvent::Created(event) => event.event_name(),
            CompanyEvent::Updated(event) => event.event_name(),
        }
    }
}

fn parse_company_id(s: &str) -> DomainResult<CompanyId> {
    CompanyId::from_string(s).map_err(|e| DomainError::EventDeserializationFailed {
        reason: format!("invalid company_id: {e}"),
    })
}

fn parse_country_id(s: &str) -> DomainResult<CountryId> {
    CountryId::from_string(s).map_err(|e| DomainError::EventDeserializationFailed {
        reason: format!("invalid country_id: {e}"),
    })
}
