//! testclean application layer
//!
//! Implements the company use cases by orchestrating the domain aggregate:
//! load or create, mutate, persist via the repository contract, publish the
//! recorded domain events, clear them, and hand back a boundary-safe
//! projection.
//!
//! # Responsibilities
//!
//! - **Use case orchestration**: one discrete caller-initiated action per
//!   service method
//! - **DTO mapping**: convert domain objects to/from presentation-safe DTOs
//! - **Error mapping**: translate domain errors into application-level errors
//! - **Event publication**: forward pending aggregate events to the injected
//!   publisher after the write commits; failures are logged, never surfaced
//!
//! # Non-goals
//!
//! - Domain logic (belongs in `testclean-domain`)
//! - Direct I/O (belongs in the infrastructure crates)
//! - HTTP/CLI handling (belongs in the presentation layer)

pub mod dto;
pub mod errors;
pub mod events;
pub mod services;

pub use dto::*;
pub use errors::{ApplicationError, ApplicationResult};
pub use events::{EventPublisher, InMemoryEventPublisher, NoOpEventPublisher, PublishError};
pub use services::CompanyService;
