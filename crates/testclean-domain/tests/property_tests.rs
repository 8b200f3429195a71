//! Property-based tests for company domain invariants
//!
//! Verify that the aggregate and its events maintain their invariants across
//! arbitrary inputs.

use proptest::prelude::*;
use uuid::Uuid;

use testclean_domain::aggregate::{CompanyAggregate, CompanyUpdate};
use testclean_domain::events::{CompanyCreated, CompanyEvent, CompanyUpdated, DomainEvent};
use testclean_domain::value_objects::{CompanyId, CountryId};

fn company_name() -> impl Strategy<Value = String> {
    // Printable names within the 255 character limit, at least one
    // non-whitespace character
    "[a-zA-Z0-9][a-zA-Z0-9 .&-]{0,60}"
}

proptest! {
    /// Every valid name produces an aggregate with identity set, creation
    /// timestamp in the past and exactly one created event matching the
    /// aggregate's identity.
    #[test]
    fn create_always_records_matching_created_event(name in company_name()) {
        let country_id = CountryId::from_uuid(Uuid::new_v4());
        let aggregate = CompanyAggregate::create(name.clone(), country_id).unwrap();

        prop_assert_eq!(aggregate.name(), name.as_str());
        prop_assert!(aggregate.created_at() <= chrono::Utc::now());
        prop_assert!(aggregate.updated_at().is_none());

        let events = aggregate.events();
        prop_assert_eq!(events.len(), 1);
        prop_assert_eq!(events[0].aggregate_id(), aggregate.id().as_uuid());
        prop_assert_eq!(events[0].event_name(), CompanyCreated::EVENT_NAME);
    }

    /// Updating the name leaves the country untouched and appends exactly
    /// one updated event carrying the resulting state.
    #[test]
    fn update_appends_single_updated_event(
        name in company_name(),
        new_name in company_name(),
    ) {
        prop_assume!(name != new_name);

        let country_id = CountryId::from_uuid(Uuid::new_v4());
        let mut aggregate = CompanyAggregate::create(name, country_id).unwrap();
        aggregate.clear_events();

        aggregate.update(CompanyUpdate {
            company_name: Some(new_name.clone()),
            country_id: None,
        }).unwrap();

        prop_assert_eq!(aggregate.country_id(), country_id);
        prop_assert!(aggregate.updated_at().is_some());

        let events = aggregate.events();
        prop_assert_eq!(events.len(), 1);
        prop_assert_eq!(events[0].event_name(), CompanyUpdated::EVENT_NAME);
        match &events[0] {
            CompanyEvent::Updated(event) => {
                prop_assert_eq!(event.company_name.as_str(), new_name.as_str())
            }
            other => prop_assert!(false, "expected updated event, got {:?}", other),
        }
    }

    /// serialize then deserialize yields an event equal in all fields
    #[test]
    fn created_event_round_trip(name in company_name()) {
        let event = CompanyCreated::new(
            CompanyId::new(),
            name,
            CountryId::from_uuid(Uuid::new_v4()),
        );

        let payload = event.serialize();
        let restored = CompanyCreated::deserialize(
            event.event_id(),
            event.occurred_on(),
            &payload,
        ).unwrap();

        prop_assert_eq!(restored, event);
    }

    /// Update timestamps never move backwards across successive updates
    #[test]
    fn update_timestamp_is_monotonic(
        first in company_name(),
        second in company_name(),
        third in company_name(),
    ) {
        prop_assume!(first != second && second != third);

        let country_id = CountryId::from_uuid(Uuid::new_v4());
        let mut aggregate = CompanyAggregate::create(first, country_id).unwrap();

        aggregate.update(CompanyUpdate {
            company_name: Some(second),
            country_id: None,
        }).unwrap();
        let after_first = aggregate.updated_at().unwrap();

        aggregate.update(CompanyUpdate {
            company_name: Some(third),
            country_id: None,
        }).unwrap();
        let after_second = aggregate.updated_at().unwrap();

        prop_assert!(after_second >= after_first);
    }
}

proptest! {
    /// CompanyId string roundtrip
    #[test]
    fn company_id_roundtrip(_dummy in 0u8..1) {
        let id = CompanyId::new();
        let restored = CompanyId::from_string(&id.to_string()).unwrap();
        prop_assert_eq!(id, restored);
    }

    /// CompanyId JSON roundtrip
    #[test]
    fn company_id_json_roundtrip(_dummy in 0u8..1) {
        let id = CompanyId::new();
        let json = serde_json::to_string(&id).unwrap();
        let restored: CompanyId = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(id, restored);
    }
}
