//! Storage layer for the company registry.
//!
//! Concrete implementations of the domain repository contracts. The
//! in-memory repository backs tests and local development; a relational
//! implementation plugs in behind the same trait.

pub mod company_repository;

pub use company_repository::InMemoryCompanyRepository;
