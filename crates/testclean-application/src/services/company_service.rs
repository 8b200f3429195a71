//! Company application service
//!
//! Orchestrates the company use cases: load or create the aggregate, invoke
//! its mutations, persist through the repository, publish the recorded
//! events, clear them, and return the persisted projection.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::dto::{CompanyDto, CreateCompanyDto, UpdateCompanyDto};
use crate::errors::{ApplicationError, ApplicationResult};
use crate::events::EventPublisher;

use testclean_domain::events::DomainEvent;
use testclean_domain::repositories::CompanyRepository;
use testclean_domain::{CompanyAggregate, CompanyId, CompanyUpdate};

/// Company application service.
///
/// Stateless; the aggregate instance is exclusively owned by the single
/// in-flight invocation that created or loaded it. The repository and
/// publisher are shared collaborators injected at construction.
pub struct CompanyService<R, P>
where
    R: CompanyRepository,
    P: EventPublisher,
{
    repository: Arc<R>,
    publisher: Arc<P>,
}

impl<R, P> CompanyService<R, P>
where
    R: CompanyRepository,
    P: EventPublisher,
{
    /// Create a new CompanyService with injected dependencies
    pub fn new(repository: Arc<R>, publisher: Arc<P>) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    /// Create a new company.
    ///
    /// The name lookup before `save` is advisory; the repository's unique
    /// constraint is the authoritative conflict check.
    pub async fn create_company(&self, dto: CreateCompanyDto) -> ApplicationResult<CompanyDto> {
        let name = dto.company_name.trim();
        if name.is_empty() {
            return Err(ApplicationError::RequiredFieldMissing("company_name".into()));
        }

        if self.repository.find_by_name(name).await?.is_some() {
            return Err(ApplicationError::CompanyAlreadyExists(name.to_string()));
        }

        let mut aggregate = CompanyAggregate::create(name.to_string(), dto.country_id)?;

        for detail in dto.details {
            aggregate.add_detail(detail.into_domain()?)?;
        }
        for company_type in dto.company_types {
            aggregate.add_company_type(company_type.into_domain()?)?;
        }

        let mut saved = self.repository.save(&aggregate).await?;
        self.publish_and_clear(&mut saved).await;

        Ok(CompanyDto::from_domain(&saved))
    }

    /// Update an existing company with a partial attribute bundle
    pub async fn update_company(
        &self,
        id: &str,
        dto: UpdateCompanyDto,
    ) -> ApplicationResult<CompanyDto> {
        let company_id = parse_company_id(id)?;

        let mut aggregate = self
            .repository
            .find_by_id(&company_id)
            .await?
            .ok_or_else(|| ApplicationError::CompanyNotFound(id.to_string()))?;

        // Advisory uniqueness check when renaming; save remains authoritative
        if let Some(new_name) = dto.company_name.as_deref() {
            if new_name != aggregate.name() {
                if let Some(existing) = self.repository.find_by_name(new_name).await? {
                    if existing.id() != company_id {
                        return Err(ApplicationError::CompanyAlreadyExists(new_name.to_string()));
                    }
                }
            }
        }

        aggregate.update(CompanyUpdate {
            company_name: dto.company_name,
            country_id: dto.country_id,
        })?;

        let mut saved = self.repository.save(&aggregate).await?;
        self.publish_and_clear(&mut saved).await;

        Ok(CompanyDto::from_domain(&saved))
    }

    /// Get a company by ID
    pub async fn get_company(&self, id: &str) -> ApplicationResult<CompanyDto> {
        let company_id = parse_company_id(id)?;

        let aggregate = self
            .repository
            .find_by_id(&company_id)
            .await?
            .ok_or_else(|| ApplicationError::CompanyNotFound(id.to_string()))?;

        Ok(CompanyDto::from_domain(&aggregate))
    }

    /// List companies with pagination
    pub async fn list_companies(
        &self,
        skip: usize,
        limit: usize,
    ) -> ApplicationResult<Vec<CompanyDto>> {
        let companies = self.repository.find_all(skip, limit).await?;
        Ok(companies.iter().map(CompanyDto::from_domain).collect())
    }

    /// Delete a company by ID
    pub async fn delete_company(&self, id: &str) -> ApplicationResult<()> {
        let company_id = parse_company_id(id)?;

        if !self.repository.delete(&company_id).await? {
            return Err(ApplicationError::CompanyNotFound(id.to_string()));
        }

        Ok(())
    }

    /// Publish the saved aggregate's pending events in recorded order, then
    /// clear them.
    ///
    /// Runs only after `save` has returned. Publication failures are logged
    /// and swallowed: the business fact is already committed, and retry is
    /// the publishing collaborator's responsibility via its failover store.
    async fn publish_and_clear(&self, saved: &mut CompanyAggregate) {
        for event in saved.events() {
            match self.publisher.publish(&event).await {
                Ok(()) => debug!(
                    event_name = event.event_name(),
                    company_id = %saved.id(),
                    "published domain event"
                ),
                Err(e) => warn!(
                    event_name = event.event_name(),
                    company_id = %saved.id(),
                    error = %e,
                    "event publication failed; state already persisted"
                ),
            }
        }
        saved.clear_events();
    }
}

fn parse_company_id(id: &str) -> ApplicationResult<CompanyId> {
    CompanyId::from_string(id)
        .map_err(|_| ApplicationError::ValidationFailed("Invalid company ID".into()))
}
