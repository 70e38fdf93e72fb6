//! API client for the fleet GraphQL endpoint.
//!
//! This module provides the `ApiClient` struct for authenticating through
//! the identity provider and POSTing GraphQL documents with the resulting
//! bearer token.

use std::time::Duration;

use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::{self, AuthError, Credential, IdentityProviderConfig, Token};
use crate::config::Config;

use super::{ApiError, GraphQlRequest, GraphQlResponse};

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for one GraphQL endpoint.
/// Clone is cheap - reqwest::Client uses Arc internally.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
    token: Option<Token>,
}

impl ApiClient {
    /// Create a new API client for the given endpoint
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: None,
        })
    }

    /// Create a client from the endpoint and timeout in the configuration
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(config.graphql_endpoint.clone(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: Token) {
        self.token = Some(token);
    }

    /// Create a new ApiClient with the given token, sharing the HTTP client.
    pub fn with_token(&self, token: Token) -> Self {
        Self {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            token: Some(token),
        }
    }

    /// Exchange credentials for a bearer token using this client's HTTP stack.
    /// The token is returned, not stored; pass it to `set_token` or `with_token`.
    pub async fn authenticate(
        &self,
        credential: &Credential,
        provider: &IdentityProviderConfig,
    ) -> Result<Token, AuthError> {
        auth::authenticate(&self.client, credential, provider).await
    }

    /// POST a GraphQL document and return the raw envelope.
    ///
    /// Fails only when no usable envelope came back; GraphQL errors are
    /// returned inside the response.
    pub async fn execute_raw(&self, request: &GraphQlRequest) -> Result<GraphQlResponse, ApiError> {
        let operation = request.label();
        if self.token.is_none() {
            warn!(operation, "Sending GraphQL request without a bearer token");
        }
        debug!(endpoint = %self.endpoint, operation, "Sending GraphQL request");

        let mut builder = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(request);
        if let Some(ref token) = self.token {
            builder = builder.bearer_auth(token.access_token());
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        let envelope = GraphQlResponse::parse(status, &body)?;
        if let Some(summary) = envelope.error_summary() {
            warn!(operation, status = %status, errors = %summary, "GraphQL errors in response");
        } else {
            debug!(operation, status = %status, "GraphQL request succeeded");
        }
        Ok(envelope)
    }

    /// POST a GraphQL document and decode `data` as `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: &GraphQlRequest,
    ) -> Result<GraphQlResponse<T>, ApiError> {
        self.execute_raw(request).await?.decode()
    }

    /// POST a GraphQL document and decode the named root field as `T`.
    pub(crate) async fn execute_field<T: DeserializeOwned>(
        &self,
        request: &GraphQlRequest,
        field: &str,
    ) -> Result<GraphQlResponse<T>, ApiError> {
        self.execute_raw(request).await?.into_field(field)
    }
}
