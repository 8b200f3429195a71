//! Runtime settings
//!
//! Defaults first, then `TESTCLEAN_`-prefixed environment variables on top
//! (e.g. `TESTCLEAN_EVENT_BUS__ENABLED=false`).

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Identity of the running service
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServiceSettings {
    /// Organization segment of the event namespace
    pub organization: String,
    /// Service segment of the event namespace
    pub service: String,
    /// Event schema version
    pub version: u32,
}

/// Event bus behavior
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EventBusSettings {
    /// When false, published events are dropped instead of dispatched
    pub enabled: bool,
}

/// Top-level runtime settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub service: ServiceSettings,
    pub event_bus: EventBusSettings,
}

impl Settings {
    /// Load settings from defaults overlaid with environment variables
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .set_default("service.organization", "testclean")?
            .set_default("service.service", "api")?
            .set_default("service.version", 1)?
            .set_default("event_bus.enabled", true)?
            .add_source(Environment::with_prefix("TESTCLEAN").separator("__"))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Namespace prefix for event names (`<org>.<service>.<version>`)
    pub fn event_namespace(&self) -> String {
        format!(
            "{}.{}.{}",
            self.service.organization, self.service.service, self.service.version
        )
    }

    fn validate(&self) -> Result<()> {
        if self.service.organization.trim().is_empty() {
            return Err(ConfigError::Validation(
                "service.organization must not be empty".to_string(),
            ));
        }
        if self.service.service.trim().is_empty() {
            return Err(ConfigError::Validation(
                "service.service must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service: ServiceSettings {
                organization: "testclean".to_string(),
                service: "api".to_string(),
                version: 1,
            },
            event_bus: EventBusSettings { enabled: true },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.service.organization, "testclean");
        assert!(settings.event_bus.enabled);
    }

    #[test]
    fn test_event_namespace() {
        let settings = Settings::default();
        assert_eq!(settings.event_namespace(), "testclean.api.1");
    }

    #[test]
    fn test_validation_rejects_blank_organization() {
        let mut settings = Settings::default();
        settings.service.organization = "  ".to_string();
        assert!(settings.validate().is_err());
    }
}
