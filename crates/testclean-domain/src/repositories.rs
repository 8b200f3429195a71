//! Repository interfaces for company persistence
//!
//! These interfaces define the contracts for data access. Implementations
//! are provided by infrastructure crates; the domain layer defines only
//! traits, no concrete implementations.

use async_trait::async_trait;

use crate::aggregate::CompanyAggregate;
use crate::errors::DomainResult;
use crate::value_objects::CompanyId;

/// Repository for the company aggregate.
///
/// `save` is an idempotent upsert by identity and is the authoritative guard
/// for the unique company name; a violation surfaces as
/// [`crate::errors::DomainError::CompanyAlreadyExists`]. The returned
/// aggregate reflects the persisted state and still carries the caller's
/// pending events so they can be published after the write commits.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Save a company (create or update), returning the persisted state
    async fn save(&self, company: &CompanyAggregate) -> DomainResult<CompanyAggregate>;

    /// Find a company by ID
    async fn find_by_id(&self, id: &CompanyId) -> DomainResult<Option<CompanyAggregate>>;

    /// Find a company by its exact name.
    ///
    /// Used for advisory pre-flight uniqueness checks; the `save` constraint
    /// is the authoritative one.
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<CompanyAggregate>>;

    /// Find all companies with pagination
    async fn find_all(&self, skip: usize, limit: usize) -> DomainResult<Vec<CompanyAggregate>>;

    /// Check if a company exists
    async fn exists(&self, id: &CompanyId) -> DomainResult<bool>;

    /// Delete a company by ID.
    ///
    /// Returns `true` if a company was deleted, `false` if none matched.
    async fn delete(&self, id: &CompanyId) -> DomainResult<bool>;
}
