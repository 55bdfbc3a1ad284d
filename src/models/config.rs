//! Configuration model loaded from external sources.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

fn default_debounce_ms() -> u64 {
    200
}

fn default_username() -> String {
    "admin".to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the search client.
pub struct ClientConfig {
    /// Base URL of the admin REST backend, e.g. `https://api.example.com`.
    pub api_url: String,
    /// How long filters must stay unchanged before a search is sent.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_username")]
    pub username: String,
    /// Signs in on start-up when set; otherwise an existing session is expected.
    #[serde(default)]
    pub password: Option<String>,
}

impl ClientConfig {
    /// Reads `<dir>/default`, then `<dir>/<app_env>` if present, then `APP_*`
    /// environment variables, later sources overriding earlier ones.
    pub fn load(dir: &str, app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&format!("{dir}/default")))
            .add_source(File::with_name(&format!("{dir}/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
