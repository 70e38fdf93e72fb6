use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of the `validateAuthn` probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthnStatus {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Identity as the API sees it; shape depends on the resolver.
    #[serde(default)]
    pub user: Option<Value>,
}
