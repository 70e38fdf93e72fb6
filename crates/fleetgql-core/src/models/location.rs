//! Domain models for locations.
//!
//! A location is either a postal address or a coordinate point. The API
//! returns them through a union, so queries select `__typename` and the
//! `Location` enum is tagged on it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    /// Format the address as a single line.
    pub fn formatted(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(ref street) = self.street_address {
            if !street.is_empty() {
                parts.push(street.clone());
            }
        }
        if let Some(ref city) = self.city {
            if !city.is_empty() {
                let city_state = match &self.state_province {
                    Some(state) if !state.is_empty() => format!("{}, {}", city, state),
                    _ => city.clone(),
                };
                parts.push(city_state);
            }
        }
        if let Some(ref country) = self.country {
            if !country.is_empty() {
                parts.push(country.clone());
            }
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressLocation {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub location_type: Option<String>,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatesLocation {
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub location_type: Option<String>,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Location {
    AddressLocation(AddressLocation),
    CoordinatesLocation(CoordinatesLocation),
}

impl Location {
    pub fn account_id(&self) -> Option<&str> {
        match self {
            Location::AddressLocation(loc) => loc.account_id.as_deref(),
            Location::CoordinatesLocation(loc) => loc.account_id.as_deref(),
        }
    }

    pub fn address(&self) -> Option<&Address> {
        match self {
            Location::AddressLocation(loc) => Some(&loc.address),
            Location::CoordinatesLocation(_) => None,
        }
    }

    pub fn coordinates(&self) -> Option<&Coordinates> {
        match self {
            Location::AddressLocation(_) => None,
            Location::CoordinatesLocation(loc) => Some(&loc.coordinates),
        }
    }
}

/// Input for creating or updating an address location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressLocationInput {
    pub account_id: String,
    pub address: Address,
}

/// Input for creating or updating a coordinates location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatesLocationInput {
    pub account_id: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListLocationsInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// `next_cursor` of the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl ListLocationsInput {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            cursor: None,
        }
    }

    /// Same options, starting at the page after `connection`.
    pub fn after(&self, connection: &LocationConnection) -> Option<Self> {
        connection.next_cursor.as_ref().map(|cursor| Self {
            cursor: Some(cursor.clone()),
            ..self.clone()
        })
    }
}

/// One page of locations. `next_cursor` is reported but never followed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationConnection {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}
