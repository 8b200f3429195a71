//! Company event handlers
//!
//! Downstream reactions to company facts. These handlers log the fact and
//! are the hook point for notifications, audit trails and read-model
//! updates.

use async_trait::async_trait;
use tracing::info;

use crate::bus::EventHandler;
use testclean_application::events::PublishError;
use testclean_domain::CompanyEvent;

/// Reacts to `company.created` facts
pub struct CompanyCreatedHandler;

#[async_trait]
impl EventHandler for CompanyCreatedHandler {
    fn name(&self) -> &str {
        "company-created"
    }

    async fn handle(&self, event: &CompanyEvent) -> Result<(), PublishError> {
        if let CompanyEvent::Created(created) = event {
            info!(
                company_id = %created.company_id,
                company_name = %created.company_name,
                "company created"
            );
        }
        Ok(())
    }
}

/// Reacts to `company.updated` facts
pub struct CompanyUpdatedHandler;

#[async_trait]
impl EventHandler for CompanyUpdatedHandler {
    fn name(&self) -> &str {
        "company-updated"
    }

    async fn handle(&self, event: &CompanyEvent) -> Result<(), PublishError> {
        if let CompanyEvent::Updated(updated) = event {
            info!(
                company_id = %updated.company_id,
                company_name = %updated.company_name,
                "company updated"
            );
        }
        Ok(())
    }
}

/// Register the default company handlers on a bus.
///
/// Intended to run once during process startup.
pub fn register_company_handlers(bus: &crate::bus::InProcessEventBus) {
    use std::sync::Arc;
    use testclean_domain::{CompanyCreated, CompanyUpdated};

    bus.register(CompanyCreated::EVENT_NAME, Arc::new(CompanyCreatedHandler));
    bus.register(CompanyUpdated::EVENT_NAME, Arc::new(CompanyUpdatedHandler));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::InProcessEventBus;
    use testclean_domain::{CompanyCreated, CompanyUpdated};

    #[test]
    fn test_register_company_handlers() {
        let bus = InProcessEventBus::new();
        register_company_handlers(&bus);

        assert_eq!(bus.handler_count(CompanyCreated::EVENT_NAME), 1);
        assert_eq!(bus.handler_count(CompanyUpdated::EVENT_NAME), 1);
    }
}
