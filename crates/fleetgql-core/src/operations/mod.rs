//! Typed operations against the fleet GraphQL schema.
//!
//! Each method on [`ApiClient`](crate::ApiClient) here sends one fixed
//! document and decodes its root field. A root field that came back `null`
//! leaves `data` as `None`, which is how "not found" shows up.

pub mod health;
pub mod locations;
pub mod units;
