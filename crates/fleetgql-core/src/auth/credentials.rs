use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};
use keyring::Entry;
use serde::Deserialize;
use tracing::debug;

const SERVICE_NAME: &str = "fleetgql";

/// Username and password used for the password-grant exchange.
#[derive(Clone)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

/// On-disk shape of the credential file: `{"user": ..., "password": ...}`.
/// The password may be left out when it lives in the OS keychain.
#[derive(Deserialize)]
struct CredentialFile {
    user: String,
    #[serde(default)]
    password: Option<String>,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from a JSON file, falling back to the OS keychain
    /// for the password when the file does not carry one.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read credential file {}", path.display()))?;
        let file = Self::parse(&contents)
            .with_context(|| format!("Failed to parse credential file {}", path.display()))?;

        let password = match file.password {
            Some(password) => password,
            None => {
                debug!(username = %file.user, "No password in credential file, using keychain");
                CredentialStore::get_password(&file.user)?
            }
        };

        Ok(Self::new(file.user, password))
    }

    fn parse(contents: &str) -> Result<CredentialFile> {
        let file: CredentialFile = serde_json::from_str(contents)?;
        if file.user.trim().is_empty() {
            bail!("Credential file has an empty user");
        }
        if matches!(file.password.as_deref(), Some("")) {
            bail!("Credential file has an empty password");
        }
        Ok(file)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub struct CredentialStore;

impl CredentialStore {
    /// Store a password for a username in the OS keychain
    pub fn store(username: &str, password: &str) -> Result<()> {
        let entry = Entry::new(SERVICE_NAME, username)
            .context("Failed to create keyring entry")?;
        entry
            .set_password(password)
            .context("Failed to store password in keychain")?;
        Ok(())
    }

    /// Retrieve password for a username from the OS keychain
    pub fn get_password(username: &str) -> Result<String> {
        let entry = Entry::new(SERVICE_NAME, username)
            .context("Failed to create keyring entry")?;
        entry
            .get_password()
            .context("Failed to retrieve password from keychain")
    }

    /// Check if a password exists for a username
    pub fn has_credentials(username: &str) -> bool {
        if let Ok(entry) = Entry::new(SERVICE_NAME, username) {
            entry.get_password().is_ok()
        } else {
            false
        }
    }
}
