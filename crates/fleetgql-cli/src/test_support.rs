//! Mock identity provider and in-memory fleet API for workflow tests.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use fleetgql_core::{ApiClient, Config, Credential, IdentityProviderConfig, Token};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const ACCOUNT: &str = "acct-cli";
const TOKEN: &str = "cli-access-token";
const CLIENT_ID: &str = "cli-client";
const USER: &str = "runner@example.com";
const PASSWORD: &str = "runner-password";

pub struct FakeFleet {
    server: MockServer,
}

impl FakeFleet {
    /// Start a server whose API answers every operation except the root
    /// fields in `failing` with an errors envelope.
    pub async fn start(failing: &[&str]) -> Self {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(json!({
                "ClientId": CLIENT_ID,
                "AuthParameters": {"USERNAME": USER, "PASSWORD": PASSWORD}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "AuthenticationResult": {
                    "AccessToken": TOKEN,
                    "ExpiresIn": 3600,
                    "TokenType": "Bearer"
                }
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "__type": "NotAuthorizedException",
                "message": "Incorrect username or password."
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(FleetResponder::failing(failing))
            .mount(&server)
            .await;

        Self { server }
    }

    pub fn config(&self) -> Config {
        Config {
            graphql_endpoint: format!("{}/graphql", self.server.uri()),
            identity: IdentityProviderConfig::new("us-east-1", CLIENT_ID)
                .with_endpoint(format!("{}/", self.server.uri())),
            credentials_path: PathBuf::from("unused.json"),
            account_id: ACCOUNT.to_string(),
            request_timeout_secs: 5,
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(format!("{}/graphql", self.server.uri()), Duration::from_secs(5))
            .expect("client builds")
            .with_token(Token::from_access_token(TOKEN))
    }
}

pub fn credential() -> Credential {
    Credential::new(USER, PASSWORD)
}

pub fn wrong_credential() -> Credential {
    Credential::new(USER, "not-the-password")
}

/// Root fields are matched by name in the query text; records live in memory.
struct FleetResponder {
    failing: HashSet<String>,
    records: Mutex<HashMap<String, Value>>,
    next_id: Mutex<u64>,
}

impl FleetResponder {
    fn failing(fields: &[&str]) -> Self {
        Self {
            failing: fields.iter().map(|f| f.to_string()).collect(),
            records: Mutex::new(HashMap::new()),
            next_id: Mutex::new(0),
        }
    }

    fn new_id(&self) -> String {
        let mut next = self.next_id.lock().expect("id lock");
        *next += 1;
        format!("id-{}", next)
    }
}

const FIELDS: &[&str] = &[
    "validateAuthn",
    "listUnits",
    "createUnit",
    "getUnit",
    "updateUnit",
    "deleteUnit",
    "listLocations",
    "createAddressLocation",
    "createCoordinatesLocation",
    "getLocation",
    "updateAddressLocation",
    "updateCoordinatesLocation",
    "deleteLocation",
];

fn data(field: &str, value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": { field: value } }))
}

fn lookup(records: &HashMap<String, Value>, id: &Value) -> Value {
    records
        .get(id.as_str().unwrap_or_default())
        .cloned()
        .unwrap_or(Value::Null)
}

fn remove(records: &mut HashMap<String, Value>, id: &Value) -> bool {
    records.remove(id.as_str().unwrap_or_default()).is_some()
}

impl Respond for FleetResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = request.body_json().unwrap_or(Value::Null);
        let query = body["query"].as_str().unwrap_or_default();
        let vars = &body["variables"];
        let Some(field) = FIELDS.iter().find(|f| query.contains(**f)) else {
            return ResponseTemplate::new(200)
                .set_body_json(json!({ "errors": [{ "message": "unknown field" }] }));
        };
        let field = *field;

        if self.failing.contains(field) {
            return ResponseTemplate::new(200).set_body_json(json!({
                "data": { field: null },
                "errors": [{
                    "message": format!("{} is unavailable", field),
                    "errorType": "InternalFailure"
                }]
            }));
        }

        let mut records = self.records.lock().expect("records lock");
        match field {
            "validateAuthn" => {
                data(field, json!({ "success": true, "message": "ok", "user": USER }))
            }
            "listUnits" => data(field, json!({ "items": [], "count": 0, "nextToken": null })),
            "listLocations" => data(field, json!({ "locations": [], "nextCursor": null })),
            "createUnit" => {
                let id = self.new_id();
                let mut unit = vars["input"].clone();
                unit["id"] = json!(id);
                records.insert(id, unit.clone());
                data(field, unit)
            }
            "getUnit" => data(field, lookup(&records, &vars["id"])),
            "updateUnit" => {
                let input = &vars["input"];
                let id = input["id"].as_str().unwrap_or_default();
                let Some(unit) = records.get_mut(id) else {
                    return data(field, Value::Null);
                };
                if let (Some(unit), Some(patch)) = (unit.as_object_mut(), input.as_object()) {
                    for (key, value) in patch {
                        unit.insert(key.clone(), value.clone());
                    }
                }
                data(field, unit.clone())
            }
            "deleteUnit" => data(field, json!(remove(&mut records, &vars["id"]))),
            "createAddressLocation" | "createCoordinatesLocation" => {
                let id = self.new_id();
                let input = &vars["input"];
                let (typename, key) = if field == "createAddressLocation" {
                    ("AddressLocation", "address")
                } else {
                    ("CoordinatesLocation", "coordinates")
                };
                let location = json!({
                    "__typename": typename,
                    "accountId": input["accountId"],
                    key: input[key],
                });
                records.insert(id.clone(), location);
                data(field, json!(id))
            }
            "getLocation" => data(field, lookup(&records, &vars["locationId"])),
            "updateAddressLocation" | "updateCoordinatesLocation" => {
                let id = vars["locationId"].as_str().unwrap_or_default().to_string();
                let key = if field == "updateAddressLocation" {
                    "address"
                } else {
                    "coordinates"
                };
                match records.get_mut(&id) {
                    Some(location) => {
                        location[key] = vars["input"][key].clone();
                        data(field, json!(id))
                    }
                    None => data(field, Value::Null),
                }
            }
            "deleteLocation" => data(field, json!(remove(&mut records, &vars["locationId"]))),
            _ => data(field, Value::Null),
        }
    }
}
