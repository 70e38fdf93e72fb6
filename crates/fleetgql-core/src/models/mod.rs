//! Data models for fleet API entities.
//!
//! This module contains the data structures exchanged with the GraphQL API:
//!
//! - `Unit` and its create/update/list inputs
//! - `Location` (address or coordinates) and its inputs
//! - `AuthnStatus`: the result of the authentication probe

pub mod authn;
pub mod location;
pub mod unit;

pub use authn::AuthnStatus;
pub use location::{
    Address, AddressLocation, AddressLocationInput, Coordinates, CoordinatesLocation,
    CoordinatesLocationInput, ListLocationsInput, Location, LocationConnection,
};
pub use unit::{CreateUnitInput, ListUnitsInput, Unit, UnitConnection, UpdateUnitInput};
