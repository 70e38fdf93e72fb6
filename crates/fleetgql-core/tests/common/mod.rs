//! Shared test infrastructure: a mock identity provider and a small
//! in-memory fake of the fleet GraphQL API, both served by wiremock.

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use fleetgql_core::{ApiClient, Credential, IdentityProviderConfig, Token};
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const GRAPHQL_PATH: &str = "/graphql";
pub const IDENTITY_PATH: &str = "/";
pub const TEST_TOKEN: &str = "test-access-token";
pub const TEST_CLIENT_ID: &str = "test-client-id";
pub const TEST_USER: &str = "fleet-tester@example.com";
pub const TEST_PASSWORD: &str = "correct-horse";
pub const TEST_ACCOUNT: &str = "acct-test";

const AMZ_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";

pub struct MockFleetServer {
    server: MockServer,
}

impl MockFleetServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn inner(&self) -> &MockServer {
        &self.server
    }

    pub fn graphql_url(&self) -> String {
        format!("{}{}", self.server.uri(), GRAPHQL_PATH)
    }

    pub fn provider(&self) -> IdentityProviderConfig {
        IdentityProviderConfig::new("us-east-1", TEST_CLIENT_ID)
            .with_endpoint(format!("{}{}", self.server.uri(), IDENTITY_PATH))
    }

    /// Client without a token
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.graphql_url(), Duration::from_secs(5)).expect("client builds")
    }

    /// Client carrying the test bearer token
    pub fn authed_client(&self) -> ApiClient {
        self.client().with_token(Token::from_access_token(TEST_TOKEN))
    }

    /// Accept `TEST_USER`/`TEST_PASSWORD` and reject everything else.
    pub async fn mock_identity_provider(&self) {
        Mock::given(method("POST"))
            .and(path(IDENTITY_PATH))
            .and(header("x-amz-target", AMZ_TARGET))
            .and(header("content-type", "application/x-amz-json-1.1"))
            .and(body_partial_json(json!({
                "AuthFlow": "USER_PASSWORD_AUTH",
                "ClientId": TEST_CLIENT_ID,
                "AuthParameters": {"USERNAME": TEST_USER, "PASSWORD": TEST_PASSWORD}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "AuthenticationResult": {
                    "AccessToken": TEST_TOKEN,
                    "ExpiresIn": 3600,
                    "TokenType": "Bearer",
                    "IdToken": "test-id-token",
                    "RefreshToken": "test-refresh-token"
                },
                "ChallengeParameters": {}
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path(IDENTITY_PATH))
            .and(header("x-amz-target", AMZ_TARGET))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "__type": "NotAuthorizedException",
                "message": "Incorrect username or password."
            })))
            .mount(&self.server)
            .await;
    }

    /// Answer every password grant with the given body and status.
    pub async fn mock_identity_response(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(IDENTITY_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serve the stateful fake API for requests bearing the test token, and a
    /// 401 envelope for anything else.
    pub async fn mount_fake_api(&self) {
        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(FakeFleetApi::default())
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path(GRAPHQL_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "errors": [{
                    "errorType": "UnauthorizedException",
                    "message": "Valid authorization header not provided."
                }]
            })))
            .mount(&self.server)
            .await;
    }
}

pub fn test_credential() -> Credential {
    Credential::new(TEST_USER, TEST_PASSWORD)
}

/// In-memory stand-in for the unit and location resolvers.
#[derive(Default)]
pub struct FakeFleetApi {
    state: Mutex<FakeState>,
}

#[derive(Default)]
struct FakeState {
    units: HashMap<String, Value>,
    locations: HashMap<String, Value>,
    next_id: u64,
}

impl FakeState {
    fn new_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{:04}", prefix, self.next_id)
    }
}

fn data(field: &str, value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": { field: value } }))
}

fn error(field: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": { field: null },
        "errors": [{ "message": message, "path": [field], "errorType": "NotFound" }]
    }))
}

fn merge(target: &mut Value, patch: &Value) {
    if let (Some(target), Some(patch)) = (target.as_object_mut(), patch.as_object()) {
        for (key, value) in patch {
            target.insert(key.clone(), value.clone());
        }
    }
}

impl Respond for FakeFleetApi {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match request.body_json() {
            Ok(body) => body,
            Err(_) => return ResponseTemplate::new(400).set_body_string("bad json"),
        };
        let query = body["query"].as_str().unwrap_or_default().to_string();
        let vars = body.get("variables").cloned().unwrap_or_else(|| Value::Object(Map::new()));
        let mut state = self.state.lock().expect("fake state lock");

        if query.contains("listUnits(") {
            let account = vars["input"]["accountId"].clone();
            let items: Vec<Value> = state
                .units
                .values()
                .filter(|u| u["accountId"] == account)
                .cloned()
                .collect();
            let count = items.len();
            data("listUnits", json!({ "items": items, "count": count, "nextToken": null }))
        } else if query.contains("createUnit(") {
            let id = state.new_id("unit");
            let mut unit = vars["input"].clone();
            merge(&mut unit, &json!({ "id": id, "createdAt": "2025-01-01T00:00:00Z" }));
            state.units.insert(id, unit.clone());
            data("createUnit", unit)
        } else if query.contains("getUnit(") {
            let id = vars["id"].as_str().unwrap_or_default();
            data("getUnit", state.units.get(id).cloned().unwrap_or(Value::Null))
        } else if query.contains("updateUnit(") {
            let input = vars["input"].clone();
            let id = input["id"].as_str().unwrap_or_default().to_string();
            match state.units.get_mut(&id) {
                Some(unit) => {
                    merge(unit, &input);
                    merge(unit, &json!({ "updatedAt": "2025-01-02T00:00:00Z" }));
                    data("updateUnit", unit.clone())
                }
                None => error("updateUnit", "Unit not found"),
            }
        } else if query.contains("deleteUnit(") {
            let id = vars["id"].as_str().unwrap_or_default();
            data("deleteUnit", json!(state.units.remove(id).is_some()))
        } else if query.contains("listLocations(") {
            let account = vars["accountId"].clone();
            let locations: Vec<Value> = state
                .locations
                .values()
                .filter(|l| l["accountId"] == account)
                .cloned()
                .collect();
            data("listLocations", json!({ "locations": locations, "nextCursor": null }))
        } else if query.contains("createAddressLocation(")
            || query.contains("createCoordinatesLocation(")
        {
            let (field, typename, kind, key) = if query.contains("createAddressLocation(") {
                ("createAddressLocation", "AddressLocation", "address", "address")
            } else {
                ("createCoordinatesLocation", "CoordinatesLocation", "coordinates", "coordinates")
            };
            let id = state.new_id("loc");
            let input = &vars["input"];
            let location = json!({
                "__typename": typename,
                "accountId": input["accountId"],
                "locationType": kind,
                key: input[key],
            });
            state.locations.insert(id.clone(), location);
            data(field, json!(id))
        } else if query.contains("getLocation(") {
            let id = vars["locationId"].as_str().unwrap_or_default();
            data("getLocation", state.locations.get(id).cloned().unwrap_or(Value::Null))
        } else if query.contains("updateAddressLocation(")
            || query.contains("updateCoordinatesLocation(")
        {
            let (field, key) = if query.contains("updateAddressLocation(") {
                ("updateAddressLocation", "address")
            } else {
                ("updateCoordinatesLocation", "coordinates")
            };
            let id = vars["locationId"].as_str().unwrap_or_default().to_string();
            let replacement = vars["input"][key].clone();
            match state.locations.get_mut(&id) {
                Some(location) => {
                    location[key] = replacement;
                    data(field, json!(id))
                }
                None => error(field, "Location not found"),
            }
        } else if query.contains("deleteLocation(") {
            let id = vars["locationId"].as_str().unwrap_or_default();
            data("deleteLocation", json!(state.locations.remove(id).is_some()))
        } else if query.contains("validateAuthn") {
            data(
                "validateAuthn",
                json!({
                    "message": "Authenticated",
                    "timestamp": "2025-01-01T00:00:00Z",
                    "user": TEST_USER,
                    "success": true
                }),
            )
        } else {
            ResponseTemplate::new(200).set_body_json(json!({
                "errors": [{
                    "message": "Cannot query unknown field",
                    "locations": [{"line": 1, "column": 1}]
                }]
            }))
        }
    }
}
