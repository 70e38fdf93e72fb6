//! Authentication module for obtaining bearer tokens.
//!
//! This module provides:
//! - `Credential`: username/password pair loaded from a JSON file
//! - `CredentialStore`: OS-level password storage via keyring
//! - `authenticate`: Cognito `USER_PASSWORD_AUTH` exchange producing a `Token`
//!
//! Tokens are held in memory only and are never written to disk.

pub mod cognito;
pub mod credentials;
pub mod error;
pub mod token;

pub use cognito::{authenticate, IdentityProviderConfig};
pub use credentials::{Credential, CredentialStore};
pub use error::AuthError;
pub use token::Token;
