use crate::domain::translation::LanguageCode;
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    /// Voice catalog requested from the backend, whatever the target language
    pub voice_language: LanguageCode,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Provider keys are consumed by the backend; we only carry them
    pub openai_api_key: Option<String>,
    pub elevenlabs_api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            voice_language: voice_language_from(non_empty_var("VOICE_LANGUAGE"))?,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8501".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            openai_api_key: non_empty_var("OPENAI_API_KEY"),
            elevenlabs_api_key: non_empty_var("ELEVENLABS_API_KEY"),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

/// The backend serves the `en` and `ht` catalogs; `en` unless overridden
fn voice_language_from(value: Option<String>) -> Result<LanguageCode, String> {
    value.map_or(Ok(LanguageCode::English), |code| code.parse())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |key: &Option<String>| if key.is_some() { "[REDACTED]" } else { "<unset>" };
        f.debug_struct("Config")
            .field("api_base_url", &self.api_base_url)
            .field("voice_language", &self.voice_language)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("log_format", &self.log_format)
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("elevenlabs_api_key", &redact(&self.elevenlabs_api_key))
            .finish()
    }
}
