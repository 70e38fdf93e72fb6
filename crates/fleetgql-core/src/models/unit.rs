//! Domain models for units (vehicles).

use serde::{Deserialize, Serialize};

/// A vehicle record owned by an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub suggested_vin: Option<String>,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub manufacturer_name: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub model_year: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Unit {
    /// "Make Model Year" for display, skipping missing parts.
    pub fn display_name(&self) -> String {
        [&self.make, &self.model, &self.model_year]
            .iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitInput {
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_vin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
}

impl CreateUnitInput {
    /// True when every field set here has the same value on `unit`.
    pub fn matches(&self, unit: &Unit) -> bool {
        fn same(wanted: &Option<String>, actual: &Option<String>) -> bool {
            wanted.is_none() || wanted == actual
        }
        unit.account_id.as_deref() == Some(self.account_id.as_str())
            && same(&self.suggested_vin, &unit.suggested_vin)
            && same(&self.make, &unit.make)
            && same(&self.manufacturer_name, &unit.manufacturer_name)
            && same(&self.model, &unit.model)
            && same(&self.model_year, &unit.model_year)
            && same(&self.series, &unit.series)
            && same(&self.vehicle_type, &unit.vehicle_type)
    }
}

/// Partial update; only the fields that are set are sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUnitInput {
    pub id: String,
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_vin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
}

impl UpdateUnitInput {
    pub fn new(id: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            account_id: account_id.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUnitsInput {
    pub account_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// `next_token` of the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl ListUnitsInput {
    pub fn new(account_id: impl Into<String>, limit: Option<u32>) -> Self {
        Self {
            account_id: account_id.into(),
            limit,
            next_token: None,
        }
    }

    /// Same query, starting at the page after `connection`.
    pub fn after(&self, connection: &UnitConnection) -> Option<Self> {
        connection.next_token.as_ref().map(|token| Self {
            next_token: Some(token.clone()),
            ..self.clone()
        })
    }
}

/// One page of units. `next_token` is reported but never followed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitConnection {
    #[serde(default)]
    pub items: Vec<Unit>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub next_token: Option<String>,
}
