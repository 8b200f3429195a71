//! Data Transfer Objects for layer boundary crossing
//!
//! DTOs prevent domain model leakage to the presentation layer and give the
//! boundary a stable contract while domain internals evolve.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use testclean_domain::{
    CompanyAggregate, CompanyDetail, CompanyType, CompanyTypeId, CountryId, DomainResult,
    IdentificationTypeId,
};

/// Detail bundle as received from / returned to the boundary layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyDetailDto {
    pub identification_type_id: IdentificationTypeId,
    pub identity_number: String,
    pub address: Option<String>,
    pub number_indicative: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub city_id: Option<testclean_domain::CityId>,
    pub active: bool,
    pub person_type: Option<String>,
    pub status: Option<String>,
    pub verified: bool,
}

impl CompanyDetailDto {
    /// Build the DTO from a domain detail
    pub fn from_domain(detail: &CompanyDetail) -> Self {
        Self {
            identification_type_id: detail.identification_type_id(),
            identity_number: detail.identity_number().to_string(),
            address: detail.address().map(str::to_string),
            number_indicative: detail.number_indicative().map(str::to_string),
            phone_number: detail.phone_number().map(str::to_string),
            email: detail.email().map(str::to_string),
            city_id: detail.city_id(),
            active: detail.is_active(),
            person_type: detail.person_type().map(str::to_string),
            status: detail.status().map(str::to_string),
            verified: detail.is_verified(),
        }
    }

    /// Convert into a validated domain value object
    pub fn into_domain(self) -> DomainResult<CompanyDetail> {
        let mut detail = CompanyDetail::new(self.identification_type_id, self.identity_number)?;

        if let Some(address) = self.address {
            detail = detail.with_address(address);
        }
        if let (Some(indicative), Some(number)) = (self.number_indicative, self.phone_number) {
            detail = detail.with_phone(indicative, number);
        }
        if let Some(email) = self.email {
            detail = detail.with_email(email)?;
        }
        if let Some(city_id) = self.city_id {
            detail = detail.with_city(city_id);
        }
        if let Some(person_type) = self.person_type {
            detail = detail.with_person_type(person_type);
        }
        if let Some(status) = self.status {
            detail = detail.with_status(status);
        }
        if self.verified {
            detail = detail.verified();
        }
        if !self.active {
            detail = detail.deactivated();
        }

        Ok(detail)
    }
}

/// Company type association DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyTypeDto {
    pub company_type_id: CompanyTypeId,
    pub type_name: String,
}

impl CompanyTypeDto {
    pub fn from_domain(company_type: &CompanyType) -> Self {
        Self {
            company_type_id: company_type.id(),
            type_name: company_type.type_name().to_string(),
        }
    }

    pub fn into_domain(self) -> DomainResult<CompanyType> {
        CompanyType::new(self.company_type_id, self.type_name)
    }
}

/// Command DTO for creating a company
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompanyDto {
    pub company_name: String,
    pub country_id: CountryId,
    #[serde(default)]
    pub details: Vec<CompanyDetailDto>,
    #[serde(default)]
    pub company_types: Vec<CompanyTypeDto>,
}

/// Command DTO for partially updating a company.
///
/// All fields are optional; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompanyDto {
    pub company_name: Option<String>,
    pub country_id: Option<CountryId>,
}

/// Full projection of a persisted company for the boundary layer
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDto {
    pub company_id: String,
    pub company_name: String,
    pub country_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub details: Vec<CompanyDetailDto>,
    pub company_types: Vec<CompanyTypeDto>,
}

impl CompanyDto {
    /// Project a persisted aggregate into its external-facing shape
    pub fn from_domain(aggregate: &CompanyAggregate) -> Self {
        Self {
            company_id: aggregate.id().to_string(),
            company_name: aggregate.name().to_string(),
            country_id: aggregate.country_id().to_string(),
            created_at: aggregate.created_at(),
            updated_at: aggregate.updated_at(),
            details: aggregate
                .details()
                .iter()
                .map(CompanyDetailDto::from_domain)
                .collect(),
            company_types: aggregate
                .company_types()
                .iter()
                .map(CompanyTypeDto::from_domain)
                .collect(),
        }
    }
}
