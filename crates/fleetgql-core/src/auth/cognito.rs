//! Cognito `InitiateAuth` password-grant exchange.
//!
//! The call is unsigned: Cognito accepts `USER_PASSWORD_AUTH` from public app
//! clients with only the client id, so no AWS credentials are involved.

use reqwest::{header, Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::api::error::truncate_body;

use super::{AuthError, Credential, Token};

const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const AMZ_TARGET_HEADER: &str = "X-Amz-Target";
const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
const PASSWORD_AUTH_FLOW: &str = "USER_PASSWORD_AUTH";

/// Where and how to run the password grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProviderConfig {
    /// AWS region of the user pool, e.g. `us-east-1`
    pub region: String,
    /// App client id that allows `USER_PASSWORD_AUTH`
    pub client_id: String,
    /// Override for the regional Cognito endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl IdentityProviderConfig {
    pub fn new(region: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            client_id: client_id.into(),
            endpoint: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn endpoint_url(&self) -> String {
        match self.endpoint {
            Some(ref endpoint) => endpoint.clone(),
            None => format!("https://cognito-idp.{}.amazonaws.com/", self.region),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
    authentication_result: Option<AuthenticationResult>,
    challenge_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    #[serde(default)]
    access_token: String,
    expires_in: Option<i64>,
    token_type: Option<String>,
    id_token: Option<String>,
    refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(rename = "__type")]
    kind: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Exchange a username and password for a bearer token.
pub async fn authenticate(
    client: &Client,
    credential: &Credential,
    provider: &IdentityProviderConfig,
) -> Result<Token, AuthError> {
    let url = provider.endpoint_url();
    let body = json!({
        "AuthFlow": PASSWORD_AUTH_FLOW,
        "ClientId": provider.client_id,
        "AuthParameters": {
            "USERNAME": credential.username,
            "PASSWORD": credential.password,
        }
    });

    debug!(url = %url, username = %credential.username, "Requesting token via password grant");

    let response = client
        .post(&url)
        .header(header::CONTENT_TYPE, AMZ_JSON_CONTENT_TYPE)
        .header(AMZ_TARGET_HEADER, INITIATE_AUTH_TARGET)
        .body(body.to_string())
        .send()
        .await?;

    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let err = rejection_from_body(status, &text);
        warn!(status = %status, error = %err, "Password grant rejected");
        return Err(err);
    }

    let parsed: InitiateAuthResponse = serde_json::from_str(&text).map_err(|e| {
        AuthError::InvalidResponse(format!("Failed to parse InitiateAuth response: {}", e))
    })?;

    let result = match (parsed.authentication_result, parsed.challenge_name) {
        (Some(result), _) => result,
        (None, Some(challenge)) => {
            warn!(challenge = %challenge, "Password grant answered with a challenge");
            return Err(AuthError::ChallengeRequired(challenge));
        }
        (None, None) => {
            return Err(AuthError::InvalidResponse(
                "Response carried neither AuthenticationResult nor ChallengeName".to_string(),
            ))
        }
    };

    if result.access_token.is_empty() {
        return Err(AuthError::InvalidResponse("Empty access token".to_string()));
    }

    info!(username = %credential.username, expires_in = ?result.expires_in, "Authenticated");

    Ok(Token::from_access_token(result.access_token)
        .with_token_type(result.token_type)
        .with_expiry_secs(result.expires_in)
        .with_extra_tokens(result.id_token, result.refresh_token))
}

/// Turn a non-2xx provider response into a rejection.
/// Cognito reports `{"__type": "NotAuthorizedException", "message": "..."}`;
/// the type may carry a namespace prefix ending in `#`.
fn rejection_from_body(status: StatusCode, body: &str) -> AuthError {
    match serde_json::from_str::<ProviderErrorBody>(body) {
        Ok(ProviderErrorBody { kind, message }) => {
            let code = kind
                .as_deref()
                .map(|k| k.rsplit('#').next().unwrap_or(k).to_string())
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            AuthError::Rejected {
                code,
                message: message.unwrap_or_else(|| status.to_string()),
            }
        }
        Err(_) => AuthError::Rejected {
            code: format!("HTTP {}", status.as_u16()),
            message: truncate_body(body),
        },
    }
}
