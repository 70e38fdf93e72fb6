//! Core library for fleetgql.
//!
//! This crate provides the pieces needed to talk to the fleet GraphQL API:
//!
//! - `auth`: credential loading, OS keychain storage, and the Cognito
//!   password-grant exchange that yields a bearer [`Token`]
//! - `api`: the [`ApiClient`] that POSTs GraphQL requests with the bearer
//!   token attached and returns the `{data, errors}` envelope
//! - `models`: unit and location domain types
//! - `operations`: typed unit, location and health queries on [`ApiClient`]
//! - `config`: the JSON configuration file
//!
//! Transport failures are errors; GraphQL errors reported by the server are
//! returned as data inside [`GraphQlResponse`].

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod operations;

pub use api::{ApiClient, ApiError, GraphQlError, GraphQlRequest, GraphQlResponse};
pub use auth::{AuthError, Credential, CredentialStore, IdentityProviderConfig, Token};
pub use config::Config;
