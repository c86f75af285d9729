//! Configuration model loaded from external sources.

use std::env;
use std::time::Duration;

use config::{Config, ConfigError};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.admin.u-code.io";
pub const DEFAULT_TABLE_SLUG: &str = "notifications";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by the HTTP server and the one-shot handler.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub base_url: String,
    pub table_slug: String,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Loads `config/default`, the `APP_ENV` profile and `APP_*` overrides.
    pub fn load() -> Result<Self, ConfigError> {
        // Select config profile (defaults to `local`).
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("table_slug", DEFAULT_TABLE_SLUG)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            base_url: DEFAULT_BASE_URL.to_string(),
            table_slug: DEFAULT_TABLE_SLUG.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
