//! In-memory company repository
//!
//! Implements the domain repository contract against a process-local map.
//! The unique-name constraint is enforced here, on save, making this the
//! authoritative conflict check regardless of any advisory pre-flight
//! lookup.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use testclean_domain::repositories::CompanyRepository;
use testclean_domain::{CompanyAggregate, CompanyId, DomainError, DomainResult};

/// In-memory implementation of [`CompanyRepository`].
///
/// Safe for concurrent use by multiple in-flight use cases.
#[derive(Default)]
pub struct InMemoryCompanyRepository {
    companies: RwLock<HashMap<Uuid, CompanyAggregate>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted companies
    pub fn count(&self) -> usize {
        self.companies.read().unwrap().len()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn save(&self, company: &CompanyAggregate) -> DomainResult<CompanyAggregate> {
        let mut companies = self.companies.write().unwrap();

        // authoritative unique-name check, excluding the row being upserted
        let conflict = companies
            .values()
            .any(|existing| existing.name() == company.name() && existing.id() != company.id());
        if conflict {
            return Err(DomainError::CompanyAlreadyExists {
                name: company.name().to_string(),
            });
        }

        // persisted state carries no pending events
        let mut stored = company.clone();
        stored.clear_events();
        companies.insert(company.id().as_uuid(), stored);

        debug!(company_id = %company.id(), "company saved");

        // returned snapshot keeps the caller's pending events so they can be
        // published after the write
        Ok(company.clone())
    }

    async fn find_by_id(&self, id: &CompanyId) -> DomainResult<Option<CompanyAggregate>> {
        Ok(self.companies.read().unwrap().get(&id.as_uuid()).cloned())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<CompanyAggregate>> {
        Ok(self
            .companies
            .read()
            .unwrap()
            .values()
            .find(|company| company.name() == name)
            .cloned())
    }

    async fn find_all(&self, skip: usize, limit: usize) -> DomainResult<Vec<CompanyAggregate>> {
        let companies = self.companies.read().unwrap();
        let mut all: Vec<CompanyAggregate> = companies.values().cloned().collect();
        // stable page order
        all.sort_by_key(|company| (company.created_at(), company.id().as_uuid()));
        Ok(all.into_iter().skip(skip).take(limit).collect())
    }

    async fn exists(&self, id: &CompanyId) -> DomainResult<bool> {
        Ok(self.companies.read().unwrap().contains_key(&id.as_uuid()))
    }

    async fn delete(&self, id: &CompanyId) -> DomainResult<bool> {
        Ok(self
            .companies
            .write()
            .unwrap()
            .remove(&id.as_uuid())
            .is_some())
    }
}
