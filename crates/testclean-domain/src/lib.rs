//! Core domain layer for the testclean company registry.
//!
//! Contains the company aggregate (the consistency boundary), its entities
//! and value objects, the domain events it records, and the repository
//! contract its persistence flows through. Pure business logic: nothing in
//! this crate performs I/O.

pub mod aggregate;
pub mod entities;
pub mod errors;
pub mod events;
pub mod repositories;
pub mod value_objects;

pub use aggregate::{CompanyAggregate, CompanyUpdate};
pub use entities::{Company, CompanyType};
pub use errors::{DomainError, DomainResult};
pub use events::{CompanyCreated, CompanyEvent, CompanyUpdated, DomainEvent, EventMetadata};
pub use value_objects::{
    CityId, CompanyDetail, CompanyId, CompanyTypeId, CountryId, IdentificationTypeId,
};
