//! Handles settings for the application.
//!
//! Values are layered, later sources winning:
//!
//! 1. `settings.toml` (optional)
//! 2. `EXPENSES__<SECTION>__<KEY>` environment variables
//! 3. `DATABASE_URL` and `PORT`
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database_url: String,
    /// Required `Authorization` header value. Unset means no check.
    pub authorization: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources(
            File::with_name("settings").required(false),
            std::env::var("DATABASE_URL").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn from_sources<S>(
        file: S,
        database_url: Option<String>,
        port: Option<String>,
    ) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let port = port.map(|port| port.trim_start_matches(':').to_string());

        Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.port", 2565)?
            .set_default("server.database_url", "sqlite::memory:")?
            .add_source(file)
            .add_source(Environment::with_prefix("EXPENSES").separator("__"))
            .set_override_option("server.database_url", database_url)?
            .set_override_option("server.port", port)?
            .build()?
            .try_deserialize()
    }
}
