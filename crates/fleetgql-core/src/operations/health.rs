use crate::api::{ApiClient, ApiError, GraphQlRequest, GraphQlResponse};
use crate::models::AuthnStatus;

pub const VALIDATE_AUTHN_QUERY: &str = r#"
query ValidateAuthn {
  validateAuthn {
    message
    timestamp
    user
    success
  }
}
"#;

impl ApiClient {
    /// Ask the API whether the bearer token is accepted.
    pub async fn validate_authn(&self) -> Result<GraphQlResponse<AuthnStatus>, ApiError> {
        let request = GraphQlRequest::new(VALIDATE_AUTHN_QUERY);
        self.execute_field(&request, "validateAuthn").await
    }
}
