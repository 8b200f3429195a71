//! Messaging infrastructure for the company registry.
//!
//! Provides the in-process event bus behind the application layer's
//! `EventPublisher` port, the default company event handlers, and the local
//! failover store that parks events the bus could not deliver.

pub mod bus;
pub mod failover;
pub mod handlers;

pub use bus::{EventHandler, InProcessEventBus};
pub use failover::{FailoverEventStore, FailoverPublisher, StoredEvent};
pub use handlers::{register_company_handlers, CompanyCreatedHandler, CompanyUpdatedHandler};
