//! Smoke-test workflows run against a live API with an authenticated client.

pub mod locations;
pub mod units;
pub mod validate;
