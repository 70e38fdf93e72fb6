use std::fmt;

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

/// Token type assumed when the provider does not report one.
const DEFAULT_TOKEN_TYPE: &str = "Bearer";

/// Bearer token returned by the identity exchange.
///
/// Lives in memory for the length of a run. It is not
/// serializable, and `Debug` output never shows the secrets.
#[derive(Clone)]
pub struct Token {
    access_token: String,
    token_type: String,
    id_token: Option<String>,
    refresh_token: Option<String>,
    expires_in: Option<Duration>,
    obtained_at: DateTime<Utc>,
}

impl Token {
    /// Wrap an access token obtained elsewhere. No expiry is known.
    pub fn from_access_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: DEFAULT_TOKEN_TYPE.to_string(),
            id_token: None,
            refresh_token: None,
            expires_in: None,
            obtained_at: Utc::now(),
        }
    }

    pub(crate) fn with_expiry_secs(mut self, expires_in: Option<i64>) -> Self {
        self.expires_in = expires_in.and_then(|secs| {
            let lifetime = Duration::try_seconds(secs);
            if lifetime.is_none() {
                warn!(expires_in = secs, "Ignoring out-of-range token lifetime");
            }
            lifetime
        });
        self
    }

    pub(crate) fn with_token_type(mut self, token_type: Option<String>) -> Self {
        if let Some(token_type) = token_type.filter(|t| !t.is_empty()) {
            self.token_type = token_type;
        }
        self
    }

    pub(crate) fn with_extra_tokens(
        mut self,
        id_token: Option<String>,
        refresh_token: Option<String>,
    ) -> Self {
        self.id_token = id_token;
        self.refresh_token = refresh_token;
        self
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    pub fn id_token(&self) -> Option<&str> {
        self.id_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn obtained_at(&self) -> DateTime<Utc> {
        self.obtained_at
    }

    /// `None` when no lifetime is known or the expiry is past the
    /// representable date range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_in
            .and_then(|lifetime| self.obtained_at.checked_add_signed(lifetime))
    }

    /// A token with no known expiry never reports itself as expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at().map(|expiry| Utc::now() > expiry).unwrap_or(false)
    }

    pub fn time_until_expiry(&self) -> Option<Duration> {
        self.expires_at().map(|expiry| expiry - Utc::now())
    }

    /// Get minutes remaining until expiry (for display)
    pub fn minutes_until_expiry(&self) -> Option<i64> {
        self.time_until_expiry().map(|d| d.num_minutes().max(0))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("token_type", &self.token_type)
            .field("access_token", &"<redacted>")
            .field("has_id_token", &self.id_token.is_some())
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("expires_at", &self.expires_at())
            .finish()
    }
}
