//! Configuration management.
//!
//! The configuration names the GraphQL endpoint, the identity provider, the
//! credential file and the account the workflows operate on. Nothing here
//! has a built-in default value except the request timeout.
//!
//! Configuration is read from `$FLEETGQL_CONFIG` when set, otherwise from
//! `~/.config/fleetgql/config.json`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::client::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::auth::IdentityProviderConfig;

/// Application name used for the config directory path
const APP_NAME: &str = "fleetgql";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "FLEETGQL_CONFIG";

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub graphql_endpoint: String,
    pub identity: IdentityProviderConfig,
    /// JSON file holding `{"user": ..., "password": ...}`. Relative paths
    /// are resolved against the directory of the config file.
    pub credentials_path: PathBuf,
    /// Account the unit and location workflows read and write
    pub account_id: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load from `$FLEETGQL_CONFIG` or the default location.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        if config.credentials_path.is_relative() {
            if let Some(parent) = path.parent() {
                config.credentials_path = parent.join(&config.credentials_path);
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.graphql_endpoint.trim().is_empty() {
            bail!("graphqlEndpoint must not be empty");
        }
        if !self.graphql_endpoint.starts_with("http://")
            && !self.graphql_endpoint.starts_with("https://")
        {
            bail!("graphqlEndpoint must be an http(s) URL: {}", self.graphql_endpoint);
        }
        if self.identity.client_id.trim().is_empty() {
            bail!("identity.clientId must not be empty");
        }
        if self.identity.region.trim().is_empty() && self.identity.endpoint.is_none() {
            bail!("identity.region must be set when identity.endpoint is not");
        }
        if self.account_id.trim().is_empty() {
            bail!("accountId must not be empty");
        }
        if self.request_timeout_secs == 0 {
            bail!("requestTimeoutSecs must be greater than zero");
        }
        Ok(())
    }
}
