use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment: environment.to_string(),
            level: settings.level.clone(),
            json_format: settings.json_format,
        }
    }

    /// Filter used when `RUST_LOG` is not set.
    pub fn filter_directives(&self) -> String {
        format!("{},docask=debug,tower_http=debug", self.level)
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local.to_string(),
            level: "info".to_string(),
            json_format: false,
        }
    }
}
