use crate::api::{ApiClient, ApiError, GraphQlRequest, GraphQlResponse};
use crate::models::{CreateUnitInput, ListUnitsInput, Unit, UnitConnection, UpdateUnitInput};

pub const LIST_UNITS_QUERY: &str = r#"
query ListUnits($input: ListUnitsInput!) {
  listUnits(input: $input) {
    items {
      id
      accountId
      suggestedVin
      make
      model
      modelYear
    }
    count
    nextToken
  }
}
"#;

pub const GET_UNIT_QUERY: &str = r#"
query GetUnit($id: ID!, $accountId: String!) {
  getUnit(id: $id, accountId: $accountId) {
    id
    accountId
    suggestedVin
    make
    manufacturerName
    model
    modelYear
    series
    vehicleType
    createdAt
    updatedAt
  }
}
"#;

pub const CREATE_UNIT_MUTATION: &str = r#"
mutation CreateUnit($input: CreateUnitInput!) {
  createUnit(input: $input) {
    id
    accountId
    suggestedVin
    make
    manufacturerName
    model
    modelYear
    series
    vehicleType
    createdAt
  }
}
"#;

pub const UPDATE_UNIT_MUTATION: &str = r#"
mutation UpdateUnit($input: UpdateUnitInput!) {
  updateUnit(input: $input) {
    id
    accountId
    make
    model
    modelYear
    updatedAt
  }
}
"#;

pub const DELETE_UNIT_MUTATION: &str = r#"
mutation DeleteUnit($id: ID!, $accountId: String!) {
  deleteUnit(id: $id, accountId: $accountId)
}
"#;

impl ApiClient {
    /// Fetch one page of units for an account
    pub async fn list_units(
        &self,
        input: &ListUnitsInput,
    ) -> Result<GraphQlResponse<UnitConnection>, ApiError> {
        let request = GraphQlRequest::new(LIST_UNITS_QUERY).variable_from("input", input)?;
        self.execute_field(&request, "listUnits").await
    }

    /// Fetch a unit by id; `data` is `None` when it does not exist
    pub async fn get_unit(
        &self,
        id: &str,
        account_id: &str,
    ) -> Result<GraphQlResponse<Unit>, ApiError> {
        let request = GraphQlRequest::new(GET_UNIT_QUERY)
            .variable("id", id)
            .variable("accountId", account_id);
        self.execute_field(&request, "getUnit").await
    }

    pub async fn create_unit(
        &self,
        input: &CreateUnitInput,
    ) -> Result<GraphQlResponse<Unit>, ApiError> {
        let request = GraphQlRequest::new(CREATE_UNIT_MUTATION).variable_from("input", input)?;
        self.execute_field(&request, "createUnit").await
    }

    pub async fn update_unit(
        &self,
        input: &UpdateUnitInput,
    ) -> Result<GraphQlResponse<Unit>, ApiError> {
        let request = GraphQlRequest::new(UPDATE_UNIT_MUTATION).variable_from("input", input)?;
        self.execute_field(&request, "updateUnit").await
    }

    /// Delete a unit; `data` is the server's success flag
    pub async fn delete_unit(
        &self,
        id: &str,
        account_id: &str,
    ) -> Result<GraphQlResponse<bool>, ApiError> {
        let request = GraphQlRequest::new(DELETE_UNIT_MUTATION)
            .variable("id", id)
            .variable("accountId", account_id);
        self.execute_field(&request, "deleteUnit").await
    }
}
