//! GraphQL API client module.
//!
//! This module provides the `ApiClient` for sending GraphQL queries and
//! mutations to a single endpoint with a bearer token attached.
//!
//! Transport and HTTP-level failures surface as `ApiError`; errors the
//! GraphQL server reports in its response body are returned as data in
//! `GraphQlResponse::errors`.

pub mod client;
pub mod error;
pub mod graphql;

pub use client::ApiClient;
pub use error::ApiError;
pub use graphql::{GraphQlError, GraphQlErrorLocation, GraphQlRequest, GraphQlResponse};
