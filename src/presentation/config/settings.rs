use config::{Config, ConfigBuilder, ConfigError, File, builder::DefaultState};
use serde::Deserialize;

use super::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";
const API_KEY_VARIABLE: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    pub upload: UploadSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub chat_model: String,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

impl Settings {
    /// Defaults, then `appsettings.<environment>.toml` if present, then `APP__*`
    /// variables, then `OPENAI_API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VARIABLE)
            .ok()
            .filter(|key| !key.trim().is_empty());

        Self::base_builder()?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .set_override_option("llm.api_key", api_key)?
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults only, no file or environment lookups.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::base_builder()?.build()?.try_deserialize()
    }

    fn base_builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("llm.base_url", "https://api.openai.com/v1")?
            .set_default("llm.chat_model", "gpt-3.5-turbo")?
            .set_default("llm.timeout_secs", 60)?
            .set_default("logging.level", "info")?
            .set_default("logging.json_format", false)?
            .set_default("upload.max_file_size_mb", 20)
    }
}
