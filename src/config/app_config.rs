use serde::Deserialize;

use crate::infrastructure::classifier::ClassifierConfig;

/// Application configuration.
///
/// Loaded once at startup (files + `APP__` environment overrides) and
/// immutable for the process lifetime.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub classifier: ClassifierConfig,
    pub cache: CacheSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Cache tuning
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// TTL applied to stored classification results
    pub ttl_seconds: u64,
    /// Entry bound for the in-memory store
    pub max_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_seconds: 3600,
            max_capacity: 10_000,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::classifier::ProviderKind;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.classifier.provider, ProviderKind::Mock);
        assert_eq!(config.classifier.timeout_seconds, 5);
        assert_eq!(config.cache.ttl_seconds, 3600);
    }

    #[test]
    fn test_deserializes_from_toml_fragment() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [server]
                port = 9000
                host = "127.0.0.1"

                [classifier]
                provider = "remote"
                auth_token = "hf_token"
                timeout_seconds = 2

                [cache]
                ttl_seconds = 60
                max_capacity = 100
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.classifier.provider, ProviderKind::Remote);
        assert_eq!(config.classifier.auth_token.as_deref(), Some("hf_token"));
        assert_eq!(config.cache.ttl_seconds, 60);
    }
}
