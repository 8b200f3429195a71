//! Domain errors for the company registry

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("Detail with identity number {identity_number} already exists")]
    DuplicateDetail { identity_number: String },

    #[error("Company type {company_type_id} already assigned")]
    DuplicateCompanyType { company_type_id: String },

    #[error("Company not found: {id}")]
    CompanyNotFound { id: String },

    #[error("Company already exists with name: {name}")]
    CompanyAlreadyExists { name: String },

    #[error("Repository error: {reason}")]
    Repository { reason: String },

    #[error("Event serialization failed: {reason}")]
    EventSerializationFailed { reason: String },

    #[error("Event deserialization failed: {reason}")]
    EventDeserializationFailed { reason: String },
}

impl DomainError {
    /// Shorthand for a field validation failure
    pub fn validation(field: &str, reason: &str) -> Self {
        DomainError::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
