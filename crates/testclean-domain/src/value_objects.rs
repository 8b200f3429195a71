//! Value objects representing immutable domain concepts

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Company identifier - a UUID-based identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(uuid::Uuid);

impl CompanyId {
    /// Generate a new random company ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create from string representation
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }

    /// Access the underlying UUID
    pub fn as_uuid(&self) -> uuid::Uuid {
        self.0
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self::new()
    }
}

/// Country identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryId(uuid::Uuid);

impl CountryId {
    /// Create from string representation
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }

    /// Wrap an existing UUID
    pub fn from_uuid(id: uuid::Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID
    pub fn as_uuid(&self) -> uuid::Uuid {
        self.0
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Company type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyTypeId(uuid::Uuid);

impl CompanyTypeId {
    /// Generate a new random company type ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create from string representation
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }
}

impl fmt::Display for CompanyTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for CompanyTypeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identification type identifier (e.g. national tax id, registration number)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentificationTypeId(uuid::Uuid);

impl IdentificationTypeId {
    /// Create from string representation
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }

    /// Wrap an existing UUID
    pub fn from_uuid(id: uuid::Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for IdentificationTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// City identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityId(uuid::Uuid);

impl CityId {
    /// Create from string representation
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(uuid::Uuid::parse_str(s)?))
    }

    /// Wrap an existing UUID
    pub fn from_uuid(id: uuid::Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable bundle of company identification and contact details.
///
/// Validated fully at construction; two instances are equal iff all
/// attributes are equal. A changed detail is a new instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyDetail {
    identification_type_id: IdentificationTypeId,
    identity_number: String,
    address: Option<String>,
    number_indicative: Option<String>,
    phone_number: Option<String>,
    email: Option<String>,
    city_id: Option<CityId>,
    active: bool,
    person_type: Option<String>,
    status: Option<String>,
    verified: bool,
}

impl CompanyDetail {
    /// Create a new company detail with the required fields
    pub fn new(
        identification_type_id: IdentificationTypeId,
        identity_number: String,
    ) -> DomainResult<Self> {
        if identity_number.trim().is_empty() {
            return Err(DomainError::validation(
                "identity_number",
                "Identity number is required",
            ));
        }

        Ok(Self {
            identification_type_id,
            identity_number,
            address: None,
            number_indicative: None,
            phone_number: None,
            email: None,
            city_id: None,
            active: true,
            person_type: None,
            status: None,
            verified: false,
        })
    }

    /// Set the street address
    pub fn with_address(mut self, address: String) -> Self {
        self.address = Some(address);
        self
    }

    /// Set the phone number with its country indicative
    pub fn with_phone(mut self, number_indicative: String, phone_number: String) -> Self {
        self.number_indicative = Some(number_indicative);
        self.phone_number = Some(phone_number);
        self
    }

    /// Set the contact email, validating its format
    pub fn with_email(mut self, email: String) -> DomainResult<Self> {
        if !Self::is_valid_email(&email) {
            return Err(DomainError::Validation {
                field: "email".to_string(),
                reason: format!("Invalid email format: {email}"),
            });
        }
        self.email = Some(email);
        Ok(self)
    }

    /// Set the city
    pub fn with_city(mut self, city_id: CityId) -> Self {
        self.city_id = Some(city_id);
        self
    }

    /// Set the person type (natural/legal)
    pub fn with_person_type(mut self, person_type: String) -> Self {
        self.person_type = Some(person_type);
        self
    }

    /// Set the status label
    pub fn with_status(mut self, status: String) -> Self {
        self.status = Some(status);
        self
    }

    /// Mark the detail as verified
    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    /// Mark the detail as inactive
    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn identification_type_id(&self) -> IdentificationTypeId {
        self.identification_type_id
    }

    /// Logical key for duplicate detection inside an aggregate
    pub fn identity_number(&self) -> &str {
        &self.identity_number
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn number_indicative(&self) -> Option<&str> {
        self.number_indicative.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn city_id(&self) -> Option<CityId> {
        self.city_id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn person_type(&self) -> Option<&str> {
        self.person_type.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    fn is_valid_email(email: &str) -> bool {
        regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .unwrap()
            .is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identification_type() -> IdentificationTypeId {
        IdentificationTypeId::from_uuid(uuid::Uuid::new_v4())
    }

    #[test]
    fn test_detail_requires_identity_number() {
        let result = CompanyDetail::new(identification_type(), "   ".to_string());
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_detail_rejects_malformed_email() {
        let detail = CompanyDetail::new(identification_type(), "900123456".to_string()).unwrap();
        let result = detail.with_email("not-an-email".to_string());
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_detail_accepts_valid_email() {
        let detail = CompanyDetail::new(identification_type(), "900123456".to_string())
            .unwrap()
            .with_email("billing@example.com".to_string())
            .unwrap();
        assert_eq!(detail.email(), Some("billing@example.com"));
    }

    #[test]
    fn test_detail_equality_is_field_wise() {
        let id_type = identification_type();
        let a = CompanyDetail::new(id_type, "900123456".to_string()).unwrap();
        let b = CompanyDetail::new(id_type, "900123456".to_string()).unwrap();
        assert_eq!(a, b);

        let c = b.clone().with_address("Main St 1".to_string());
        assert_ne!(a, c);
    }
}
