use serde_json::Value;

use crate::api::{ApiClient, ApiError, GraphQlRequest, GraphQlResponse};
use crate::models::{
    AddressLocationInput, CoordinatesLocationInput, ListLocationsInput, Location,
    LocationConnection,
};

pub const GET_LOCATION_QUERY: &str = r#"
query GetLocation($accountId: String!, $locationId: String!) {
  getLocation(accountId: $accountId, locationId: $locationId) {
    __typename
    ... on AddressLocation {
      accountId
      locationType
      address {
        streetAddress
        city
        stateProvince
        postalCode
        country
      }
    }
    ... on CoordinatesLocation {
      accountId
      locationType
      coordinates {
        latitude
        longitude
        altitude
        accuracy
      }
    }
  }
}
"#;

pub const LIST_LOCATIONS_QUERY: &str = r#"
query ListLocations($accountId: String!, $options: ListLocationsInput) {
  listLocations(accountId: $accountId, options: $options) {
    locations {
      __typename
      ... on AddressLocation {
        accountId
        locationType
        address {
          streetAddress
          city
          country
        }
      }
      ... on CoordinatesLocation {
        accountId
        locationType
        coordinates {
          latitude
          longitude
        }
      }
    }
    nextCursor
  }
}
"#;

pub const CREATE_ADDRESS_LOCATION_MUTATION: &str = r#"
mutation CreateAddressLocation($input: CreateAddressLocationInput!) {
  createAddressLocation(input: $input)
}
"#;

pub const CREATE_COORDINATES_LOCATION_MUTATION: &str = r#"
mutation CreateCoordinatesLocation($input: CreateCoordinatesLocationInput!) {
  createCoordinatesLocation(input: $input)
}
"#;

pub const UPDATE_ADDRESS_LOCATION_MUTATION: &str = r#"
mutation UpdateAddressLocation($locationId: String!, $input: UpdateAddressLocationInput!) {
  updateAddressLocation(locationId: $locationId, input: $input)
}
"#;

pub const UPDATE_COORDINATES_LOCATION_MUTATION: &str = r#"
mutation UpdateCoordinatesLocation($locationId: String!, $input: UpdateCoordinatesLocationInput!) {
  updateCoordinatesLocation(locationId: $locationId, input: $input)
}
"#;

pub const DELETE_LOCATION_MUTATION: &str = r#"
mutation DeleteLocation($accountId: String!, $locationId: String!) {
  deleteLocation(accountId: $accountId, locationId: $locationId)
}
"#;

impl ApiClient {
    /// Fetch a location; `data` is `None` when it does not exist
    pub async fn get_location(
        &self,
        account_id: &str,
        location_id: &str,
    ) -> Result<GraphQlResponse<Location>, ApiError> {
        let request = GraphQlRequest::new(GET_LOCATION_QUERY)
            .variable("accountId", account_id)
            .variable("locationId", location_id);
        self.execute_field(&request, "getLocation").await
    }

    pub async fn list_locations(
        &self,
        account_id: &str,
        options: Option<&ListLocationsInput>,
    ) -> Result<GraphQlResponse<LocationConnection>, ApiError> {
        let mut request =
            GraphQlRequest::new(LIST_LOCATIONS_QUERY).variable("accountId", account_id);
        if let Some(options) = options {
            request = request.variable_from("options", options)?;
        }
        self.execute_field(&request, "listLocations").await
    }

    /// Create an address location; `data` is the new location id
    pub async fn create_address_location(
        &self,
        input: &AddressLocationInput,
    ) -> Result<GraphQlResponse<String>, ApiError> {
        let request =
            GraphQlRequest::new(CREATE_ADDRESS_LOCATION_MUTATION).variable_from("input", input)?;
        self.execute_field(&request, "createAddressLocation").await
    }

    /// Create a coordinates location; `data` is the new location id
    pub async fn create_coordinates_location(
        &self,
        input: &CoordinatesLocationInput,
    ) -> Result<GraphQlResponse<String>, ApiError> {
        let request = GraphQlRequest::new(CREATE_COORDINATES_LOCATION_MUTATION)
            .variable_from("input", input)?;
        self.execute_field(&request, "createCoordinatesLocation").await
    }

    /// Update an address location; `data` is whatever scalar the server returns
    pub async fn update_address_location(
        &self,
        location_id: &str,
        input: &AddressLocationInput,
    ) -> Result<GraphQlResponse<Value>, ApiError> {
        let request = GraphQlRequest::new(UPDATE_ADDRESS_LOCATION_MUTATION)
            .variable("locationId", location_id)
            .variable_from("input", input)?;
        self.execute_field(&request, "updateAddressLocation").await
    }

    /// Update a coordinates location; `data` is whatever scalar the server returns
    pub async fn update_coordinates_location(
        &self,
        location_id: &str,
        input: &CoordinatesLocationInput,
    ) -> Result<GraphQlResponse<Value>, ApiError> {
        let request = GraphQlRequest::new(UPDATE_COORDINATES_LOCATION_MUTATION)
            .variable("locationId", location_id)
            .variable_from("input", input)?;
        self.execute_field(&request, "updateCoordinatesLocation").await
    }

    /// Delete a location; `data` is whatever scalar the server returns
    pub async fn delete_location(
        &self,
        account_id: &str,
        location_id: &str,
    ) -> Result<GraphQlResponse<Value>, ApiError> {
        let request = GraphQlRequest::new(DELETE_LOCATION_MUTATION)
            .variable("accountId", account_id)
            .variable("locationId", location_id);
        self.execute_field(&request, "deleteLocation").await
    }
}
