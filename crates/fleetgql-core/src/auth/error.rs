use thiserror::Error;

/// Failure to obtain a token. Callers abort the workflow on any of these.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication rejected ({code}): {message}")]
    Rejected { code: String, message: String },

    #[error("Identity provider requires the {0} challenge, which is not supported")]
    ChallengeRequired(String),

    #[error("Identity provider unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("Invalid identity provider response: {0}")]
    InvalidResponse(String),
}

impl AuthError {
    /// Provider error code, e.g. `NotAuthorizedException`, when rejected.
    pub fn code(&self) -> Option<&str> {
        match self {
            AuthError::Rejected { code, .. } => Some(code),
            _ => None,
        }
    }
}
