//! Company aggregate root
//!
//! The aggregate is the consistency boundary for a company and its related
//! data: the company entity itself, its identification details and its type
//! associations. Every accepted mutation records exactly one domain event;
//! pending events stay private until the use case publishes and clears them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Company, CompanyType};
use crate::errors::{DomainError, DomainResult};
use crate::events::{CompanyCreated, CompanyEvent, CompanyUpdated};
use crate::value_objects::{CompanyDetail, CompanyId, CompanyTypeId, CountryId};

/// Partial update for a company aggregate.
///
/// `None` fields are left untouched; a provided field equal to the current
/// value does not count as a change.
#[derive(Debug, Clone, Default)]
pub struct CompanyUpdate {
    pub company_name: Option<String>,
    pub country_id: Option<CountryId>,
}

/// Company aggregate root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyAggregate {
    company: Company,
    details: Vec<CompanyDetail>,
    company_types: Vec<CompanyType>,
    events: Vec<CompanyEvent>,
}

impl CompanyAggregate {
    /// Create a new company, recording a `company.created` event.
    ///
    /// The creation timestamp is set to now; the update timestamp stays unset
    /// until the first accepted update.
    pub fn create(company_name: String, country_id: CountryId) -> DomainResult<Self> {
        let company = Company::new(company_name, country_id)?;

        let created = CompanyCreated::new(
            company.id(),
            company.name().to_string(),
            company.country_id(),
        );

        Ok(Self {
            company,
            details: Vec::new(),
            company_types: Vec::new(),
            events: vec![CompanyEvent::Created(created)],
        })
    }

    /// Rehydrate an aggregate from persisted state; no events are recorded
    pub fn restore(
        id: CompanyId,
        company_name: String,
        country_id: CountryId,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
        details: Vec<CompanyDetail>,
        company_types: Vec<CompanyType>,
    ) -> DomainResult<Self> {
        let company = Company::restore(id, company_name, country_id, created_at, updated_at)?;

        Ok(Self {
            company,
            details,
            company_types,
            events: Vec::new(),
        })
    }

    /// Apply a partial update.
    ///
    /// If at least one field actually changes, the update timestamp is
    /// stamped and exactly one `company.updated` event is recorded, carrying
    /// the resulting state. A no-op update records nothing.
    pub fn update(&mut self, changes: CompanyUpdate) -> DomainResult<()> {
        let mut changed = false;

        if let Some(name) = changes.company_name {
            if name != self.company.name() {
                self.company.update_name(name)?;
                changed = true;
            }
        }

        if let Some(country_id) = changes.country_id {
            if country_id != self.company.country_id() {
                self.company.update_country(country_id);
                changed = true;
            }
        }

        if changed {
            self.events.push(CompanyEvent::Updated(CompanyUpdated::new(
                self.company.id(),
                self.company.name().to_string(),
                self.company.country_id(),
            )));
        }

        Ok(())
    }

    /// Add an identification detail.
    ///
    /// Fails without modifying the collection if a detail with the same
    /// identity number already exists. No event is recorded; detail changes
    /// are batched with the surrounding update.
    pub fn add_detail(&mut self, detail: CompanyDetail) -> DomainResult<()> {
        if self
            .details
            .iter()
            .any(|existing| existing.identity_number() == detail.identity_number())
        {
            return Err(DomainError::DuplicateDetail {
                identity_number: detail.identity_number().to_string(),
            });
        }

        self.details.push(detail);
        Ok(())
    }

    /// Remove a detail by identity number.
    ///
    /// Returns `true` if a detail was removed, `false` if none matched.
    pub fn remove_detail(&mut self, identity_number: &str) -> bool {
        let before = self.details.len();
        self.details
            .retain(|detail| detail.identity_number() != identity_number);
        self.details.len() < before
    }

    /// Add a company type association.
    ///
    /// Fails without modifying the collection if the type is already
    /// assigned.
    pub fn add_company_type(&mut self, company_type: CompanyType) -> DomainResult<()> {
        if self
            .company_types
            .iter()
            .any(|existing| existing.id() == company_type.id())
        {
            return Err(DomainError::DuplicateCompanyType {
                company_type_id: company_type.id().to_string(),
            });
        }

        self.company_types.push(company_type);
        Ok(())
    }

    /// Remove a company type association by ID.
    ///
    /// Returns `true` if an association was removed, `false` if none matched.
    pub fn remove_company_type(&mut self, company_type_id: CompanyTypeId) -> bool {
        let before = self.company_types.len();
        self.company_types
            .retain(|company_type| company_type.id() != company_type_id);
        self.company_types.len() < before
    }

    pub fn id(&self) -> CompanyId {
        self.company.id()
    }

    pub fn name(&self) -> &str {
        self.company.name()
    }

    pub fn country_id(&self) -> CountryId {
        self.company.country_id()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.company.created_at()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.company.updated_at()
    }

    /// Read-only view of the identification details
    pub fn details(&self) -> &[CompanyDetail] {
        &self.details
    }

    /// Read-only view of the company type associations
    pub fn company_types(&self) -> &[CompanyType] {
        &self.company_types
    }

    /// Ordered snapshot of the pending domain events.
    ///
    /// The returned vector is a copy; the live pending list is never exposed.
    pub fn events(&self) -> Vec<CompanyEvent> {
        self.events.clone()
    }

    /// Number of pending events
    pub fn pending_event_count(&self) -> usize {
        self.events.len()
    }

    /// Clear the pending event list.
    ///
    /// Irreversible; intended to run only after successful publication.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::IdentificationTypeId;
    use uuid::Uuid;

    fn country() -> CountryId {
        CountryId::from_uuid(Uuid::new_v4())
    }

    fn detail(identity_number: &str) -> CompanyDetail {
        CompanyDetail::new(
            IdentificationTypeId::from_uuid(Uuid::new_v4()),
            identity_number.to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_create_records_single_created_event() {
        let aggregate =
            CompanyAggregate::create("Tech Solutions Inc.".to_string(), country()).unwrap();

        assert!(aggregate.updated_at().is_none());

        let events = aggregate.events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            CompanyEvent::Created(event) => {
                assert_eq!(event.company_id, aggregate.id());
                assert_eq!(event.company_name, "Tech Solutions Inc.");
                assert_eq!(event.country_id, aggregate.country_id());
            }
            other => panic!("expected created event, got {other:?}"),
        }
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let result = CompanyAggregate::create("   ".to_string(), country());
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_update_name_only_leaves_country_unchanged() {
        let original_country = country();
        let mut aggregate =
            CompanyAggregate::create("Tech Solutions Inc.".to_string(), original_country).unwrap();
        aggregate.clear_events();

        aggregate
            .update(CompanyUpdate {
                company_name: Some("Tech Solutions Corp.".to_string()),
                country_id: None,
            })
            .unwrap();

        assert_eq!(aggregate.name(), "Tech Solutions Corp.");
        assert_eq!(aggregate.country_id(), original_country);
        assert!(aggregate.updated_at().is_some());

        let events = aggregate.events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            CompanyEvent::Updated(event) => {
                assert_eq!(event.company_name, "Tech Solutions Corp.");
                assert_eq!(event.country_id, original_country);
            }
            other => panic!("expected updated event, got {other:?}"),
        }
    }

    #[test]
    fn test_noop_update_records_no_event() {
        let mut aggregate =
            CompanyAggregate::create("Tech Solutions Inc.".to_string(), country()).unwrap();
        aggregate.clear_events();

        aggregate
            .update(CompanyUpdate {
                company_name: Some("Tech Solutions Inc.".to_string()),
                country_id: None,
            })
            .unwrap();

        assert!(aggregate.events().is_empty());
        assert!(aggregate.updated_at().is_none());
    }

    #[test]
    fn test_update_to_empty_name_fails_and_preserves_state() {
        let mut aggregate =
            CompanyAggregate::create("Tech Solutions Inc.".to_string(), country()).unwrap();
        aggregate.clear_events();

        let result = aggregate.update(CompanyUpdate {
            company_name: Some(String::new()),
            country_id: None,
        });

        assert!(result.is_err());
        assert_eq!(aggregate.name(), "Tech Solutions Inc.");
        assert!(aggregate.events().is_empty());
    }

    #[test]
    fn test_add_duplicate_detail_fails_and_leaves_collection_unchanged() {
        let mut aggregate =
            CompanyAggregate::create("Tech Solutions Inc.".to_string(), country()).unwrap();

        aggregate.add_detail(detail("900123456")).unwrap();
        let result = aggregate.add_detail(detail("900123456"));

        assert!(matches!(result, Err(DomainError::DuplicateDetail { .. })));
        assert_eq!(aggregate.details().len(), 1);
    }

    #[test]
    fn test_remove_detail_is_noop_safe() {
        let mut aggregate =
            CompanyAggregate::create("Tech Solutions Inc.".to_string(), country()).unwrap();
        aggregate.add_detail(detail("900123456")).unwrap();

        assert!(aggregate.remove_detail("900123456"));
        assert!(!aggregate.remove_detail("900123456"));
        assert!(aggregate.details().is_empty());
    }

    #[test]
    fn test_add_duplicate_company_type_fails() {
        let mut aggregate =
            CompanyAggregate::create("Tech Solutions Inc.".to_string(), country()).unwrap();

        let type_id = CompanyTypeId::new();
        aggregate
            .add_company_type(CompanyType::new(type_id, "supplier".to_string()).unwrap())
            .unwrap();
        let result =
            aggregate.add_company_type(CompanyType::new(type_id, "supplier".to_string()).unwrap());

        assert!(matches!(
            result,
            Err(DomainError::DuplicateCompanyType { .. })
        ));
        assert_eq!(aggregate.company_types().len(), 1);
    }

    #[test]
    fn test_remove_company_type_is_noop_safe() {
        let mut aggregate =
            CompanyAggregate::create("Tech Solutions Inc.".to_string(), country()).unwrap();
        let type_id = CompanyTypeId::new();
        aggregate
            .add_company_type(CompanyType::new(type_id, "carrier".to_string()).unwrap())
            .unwrap();

        assert!(aggregate.remove_company_type(type_id));
        assert!(!aggregate.remove_company_type(type_id));
    }

    #[test]
    fn test_events_returns_a_copy() {
        let aggregate =
            CompanyAggregate::create("Tech Solutions Inc.".to_string(), country()).unwrap();

        let mut snapshot = aggregate.events();
        snapshot.clear();

        assert_eq!(aggregate.pending_event_count(), 1);
    }

    #[test]
    fn test_clear_events_empties_pending_list() {
        let mut aggregate =
            CompanyAggregate::create("Tech Solutions Inc.".to_string(), country()).unwrap();

        aggregate.clear_events();
        assert!(aggregate.events().is_empty());
    }

    #[test]
    fn test_restore_records_no_events() {
        let aggregate = CompanyAggregate::restore(
            CompanyId::new(),
            "Tech Solutions Inc.".to_string(),
            country(),
            Utc::now(),
            None,
            Vec::new(),
            Vec::new(),
        )
        .unwrap();

        assert!(aggregate.events().is_empty());
    }
}
