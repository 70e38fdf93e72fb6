//! GraphQL request and response envelope types.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use super::ApiError;

/// A query or mutation document plus its variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "variables_absent")]
    pub variables: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

/// Empty variable maps are left off the wire entirely.
fn variables_absent(variables: &Option<Map<String, Value>>) -> bool {
    variables.as_ref().map(Map::is_empty).unwrap_or(true)
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    /// Set one variable, replacing any previous value under the same name.
    pub fn variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set one variable from any serializable value.
    pub fn variable_from<T: Serialize>(
        self,
        name: impl Into<String>,
        value: &T,
    ) -> Result<Self, ApiError> {
        let value = serde_json::to_value(value)?;
        Ok(self.variable(name, value))
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Name used in log lines: the explicit operation name, else the name
    /// declared in the document (`query ListUnits(...)` gives `ListUnits`).
    pub fn label(&self) -> &str {
        if let Some(ref name) = self.operation_name {
            return name;
        }
        let mut words = self.query.split_whitespace();
        match words.next() {
            Some("query" | "mutation" | "subscription") => words
                .next()
                .map(|w| w.split(['(', '{']).next().unwrap_or(w))
                .filter(|w| !w.is_empty())
                .unwrap_or("anonymous"),
            _ => "anonymous",
        }
    }
}

/// Position of an error in the query document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// One entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GraphQlErrorLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

impl fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_type {
            Some(ref kind) => write!(f, "{}: {}", kind, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// The standard `{data, errors}` envelope.
///
/// Root-field helpers such as [`GraphQlResponse::into_field`] leave `data`
/// as `None` when the field itself was `null`, so "entity absent" reads as
/// `data == None` with no errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlResponse<T = Value> {
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQlError>>,
}

impl<T> GraphQlResponse<T> {
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().map(|e| !e.is_empty()).unwrap_or(false)
    }

    pub fn errors(&self) -> &[GraphQlError] {
        self.errors.as_deref().unwrap_or(&[])
    }

    /// Messages of all reported errors joined for display.
    pub fn error_summary(&self) -> Option<String> {
        if !self.has_errors() {
            return None;
        }
        Some(
            self.errors()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> GraphQlResponse<U> {
        GraphQlResponse {
            data: self.data.map(f),
            errors: self.errors,
        }
    }
}

impl<T: Serialize> GraphQlResponse<T> {
    /// Pretty-printed JSON for operator output.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("<unprintable response: {}>", e))
    }
}

impl GraphQlResponse<Value> {
    /// Parse a response body received with the given HTTP status.
    ///
    /// A body that is a GraphQL envelope is returned whatever the status; the
    /// server reports application errors that way. Anything else is an error.
    pub(crate) fn parse(
        status: reqwest::StatusCode,
        body: &str,
    ) -> Result<Self, ApiError> {
        match serde_json::from_str::<GraphQlResponse<Value>>(body) {
            Ok(envelope) if envelope.data.is_some() || envelope.errors.is_some() => Ok(envelope),
            Ok(_) if status.is_success() => Err(ApiError::InvalidResponse(
                "Response carried neither data nor errors".to_string(),
            )),
            Err(e) if status.is_success() => Err(ApiError::InvalidResponse(format!(
                "Failed to parse GraphQL response: {}",
                e
            ))),
            _ => Err(ApiError::from_status(status, body)),
        }
    }

    /// Decode `data` into a typed value.
    ///
    /// If `data` does not fit `T` but the server also reported errors, the
    /// errors win and `data` is dropped; otherwise the mismatch is an error.
    pub fn decode<T: DeserializeOwned>(self) -> Result<GraphQlResponse<T>, ApiError> {
        let GraphQlResponse { data, errors } = self;
        let data = match data {
            None | Some(Value::Null) => None,
            Some(value) => match serde_json::from_value::<T>(value) {
                Ok(decoded) => Some(decoded),
                Err(e) if errors.as_ref().is_some_and(|errs| !errs.is_empty()) => {
                    warn!(error = %e, "Dropping partial data that does not decode");
                    None
                }
                Err(e) => {
                    return Err(ApiError::InvalidResponse(format!(
                        "Failed to decode response data: {}",
                        e
                    )))
                }
            },
        };
        Ok(GraphQlResponse { data, errors })
    }

    /// Take a single root field out of `data` and decode it. A missing or
    /// `null` field yields `data == None`.
    pub fn into_field<T: DeserializeOwned>(
        self,
        name: &str,
    ) -> Result<GraphQlResponse<T>, ApiError> {
        let GraphQlResponse { data, errors } = self;
        let field = data.and_then(|mut root| root.get_mut(name).map(Value::take));
        GraphQlResponse { data: field, errors }.decode()
    }
}
