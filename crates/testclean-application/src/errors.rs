//! Application layer error types
//!
//! These errors represent use-case-level failures suitable for the boundary
//! layer to map onto transport-specific responses. Validation, not-found and
//! conflict conditions propagate unchanged in meaning from the domain;
//! publication failures never appear here.

use thiserror::Error;

use testclean_domain::DomainError;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone)]
pub enum ApplicationError {
    /// Input validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Required field missing
    #[error("Required field missing: {0}")]
    RequiredFieldMissing(String),

    /// Company not found
    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    /// Company with this name already exists
    #[error("Company already exists with name: {0}")]
    CompanyAlreadyExists(String),

    /// Duplicate entry within the aggregate (detail or type association)
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Repository operation failed
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Wrapped domain error
    #[error("Domain error: {0}")]
    DomainError(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { field, reason } => {
                ApplicationError::ValidationFailed(format!("{field}: {reason}"))
            }
            DomainError::CompanyNotFound { id } => ApplicationError::CompanyNotFound(id),
            DomainError::CompanyAlreadyExists { name } => {
                ApplicationError::CompanyAlreadyExists(name)
            }
            DomainError::DuplicateDetail { identity_number } => ApplicationError::DuplicateEntry(
                format!("detail with identity number {identity_number}"),
            ),
            DomainError::DuplicateCompanyType { company_type_id } => {
                ApplicationError::DuplicateEntry(format!("company type {company_type_id}"))
            }
            DomainError::Repository { reason } => ApplicationError::RepositoryError(reason),
            other => ApplicationError::DomainError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ApplicationError::ValidationFailed("company_name is required".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: company_name is required"
        );
    }

    #[test]
    fn test_domain_validation_maps_to_validation_failed() {
        let domain_err = DomainError::validation("company_name", "cannot be empty");
        let app_err: ApplicationError = domain_err.into();
        assert!(matches!(app_err, ApplicationError::ValidationFailed(_)));
    }

    #[test]
    fn test_domain_conflict_maps_to_conflict() {
        let domain_err = DomainError::CompanyAlreadyExists {
            name: "Tech Solutions Inc.".into(),
        };
        let app_err: ApplicationError = domain_err.into();
        assert!(matches!(app_err, ApplicationError::CompanyAlreadyExists(_)));
    }
}
