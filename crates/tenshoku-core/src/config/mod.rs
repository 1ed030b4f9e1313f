//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file overlaid with `TENSHOKU_`-prefixed environment
//! variables. Every field has a default, so the server starts with no
//! configuration file at all.

pub mod app;
pub mod auth;
pub mod jobs;
pub mod logging;
pub mod seed;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::jobs::JobsConfig;
pub use self::logging::LoggingConfig;
pub use self::seed::SeedConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Session management settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Job listing and application settings.
    #[serde(default)]
    pub jobs: JobsConfig,
    /// Fixture loading settings.
    #[serde(default)]
    pub seed: SeedConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional. Environment variables use the form
    /// `TENSHOKU_<SECTION>__<KEY>`, e.g. `TENSHOKU_SERVER__PORT=4000`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("TENSHOKU")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = AppConfig::load("does/not/exist").expect("defaults should load");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.jobs.default_page_size, 9);
        assert_eq!(config.jobs.max_page_size, 100);
        assert!(config.seed.enabled);
        assert_eq!(config.seed.job_count, 50);
        assert_eq!(config.session.idle_timeout_minutes, 0);
    }

    #[test]
    fn test_partial_toml_overrides_only_given_fields() {
        let parsed: AppConfig = toml_like(
            r#"
            [server]
            port = 8081

            [jobs]
            default_page_size = 12
            "#,
        );
        assert_eq!(parsed.server.port, 8081);
        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.jobs.default_page_size, 12);
        assert_eq!(parsed.jobs.max_page_size, 100);
    }

    fn toml_like(src: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize")
    }
}
