//! Core domain entities with business logic and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{CompanyId, CompanyTypeId, CountryId};

const MAX_COMPANY_NAME_LEN: usize = 255;

/// Company entity with identity and basic registration data.
///
/// Fields are private; all mutation goes through validating methods so the
/// owning aggregate cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: String,
    country_id: CountryId,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Company {
    /// Create a new company entity with validation
    pub fn new(name: String, country_id: CountryId) -> DomainResult<Self> {
        Self::validate_name(&name)?;

        Ok(Self {
            id: CompanyId::new(),
            name,
            country_id,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// Rehydrate a company entity from persisted state
    pub fn restore(
        id: CompanyId,
        name: String,
        country_id: CountryId,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        Self::validate_name(&name)?;

        Ok(Self {
            id,
            name,
            country_id,
            created_at,
            updated_at,
        })
    }

    pub fn id(&self) -> CompanyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country_id(&self) -> CountryId {
        self.country_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Update the company name with validation
    pub fn update_name(&mut self, name: String) -> DomainResult<()> {
        Self::validate_name(&name)?;
        self.name = name;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Update the registration country
    pub fn update_country(&mut self, country_id: CountryId) {
        self.country_id = country_id;
        self.updated_at = Some(Utc::now());
    }

    fn validate_name(name: &str) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                "company_name",
                "Company name cannot be empty",
            ));
        }

        if name.len() > MAX_COMPANY_NAME_LEN {
            return Err(DomainError::validation(
                "company_name",
                "Company name cannot exceed 255 characters",
            ));
        }

        Ok(())
    }
}

/// Company type association (e.g. supplier, customer, carrier)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyType {
    id: CompanyTypeId,
    type_name: String,
}

impl CompanyType {
    /// Create a new company type
    pub fn new(id: CompanyTypeId, type_name: String) -> DomainResult<Self> {
        if type_name.trim().is_empty() {
            return Err(DomainError::validation(
                "type_name",
                "Company type name cannot be empty",
            ));
        }

        Ok(Self { id, type_name })
    }

    /// Logical key for duplicate detection inside an aggregate
    pub fn id(&self) -> CompanyTypeId {
        self.id
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}
