//! Application configuration
//!
//! Layered loading: built-in defaults, then an optional `grantguide.toml`
//! file, then `GRANTGUIDE_`-prefixed environment variables with `__` as the
//! path separator. The Gemini API key is expected to arrive via
//! `GRANTGUIDE_GEMINI__API_KEY`.

use ai_core::GeminiConfig;
use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS; empty means same-origin only
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for binding
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini provider configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("gemini.model", "gemini-2.0-flash")?
            .add_source(config::File::with_name("grantguide").required(false))
            // Override with environment variables (e.g., GRANTGUIDE_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix("GRANTGUIDE")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_server_binds_all_interfaces() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
        assert!(config.server.allowed_origins.is_empty());
    }

    #[test]
    fn default_gemini_has_no_key() {
        let config = AppConfig::default();
        assert!(!config.gemini.has_api_key());
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
    }

    #[test]
    fn deserializes_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            allowed_origins = ["https://grantguide.example"]

            [gemini]
            api_key = "secret"
            model = "gemini-1.5-pro"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.server.allowed_origins.len(), 1);
        assert!(config.gemini.has_api_key());
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.gemini.timeout_ms, 30_000);
    }
}
