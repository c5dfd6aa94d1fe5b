//! Shared helpers for the integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use cf_manager_api::{ClientConfig, CloudflareClient, Credentials};
use serde_json::{Value, json};
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

pub const ZONE_ID: &str = "zone-1";
pub const EMAIL: &str = "ops@example.com";
pub const API_KEY: &str = "0123456789abcdef0123456789abcdef01234";

/// Asserts that a `Result` is `Ok` and yields the value; otherwise fails the test.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Asserts that a `Result` is `Err` and yields the error; otherwise fails the test.
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

pub fn credentials() -> Credentials {
    Credentials {
        email: EMAIL.to_string(),
        api_key: API_KEY.to_string(),
    }
}

/// Client pointed at the mock server, with valid-looking credentials.
#[allow(clippy::expect_used)]
pub fn client_for(server: &MockServer) -> CloudflareClient {
    let config = ClientConfig::new(credentials(), ZONE_ID).with_base_url(&server.uri());
    CloudflareClient::new(config).expect("client should build")
}

/// Standard Cloudflare success envelope.
pub fn success(result: Value) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result
    })
}

/// Standard Cloudflare error envelope.
pub fn failure(code: i64, message: &str) -> Value {
    json!({
        "success": false,
        "errors": [{"code": code, "message": message}],
        "messages": [],
        "result": null
    })
}

/// In-memory zone answering the `dns_records` collection:
/// `GET` lists, `POST` creates, `DELETE /{id}` removes.
#[derive(Clone, Default)]
pub struct FakeZone {
    records: Arc<Mutex<Vec<Value>>>,
}

impl FakeZone {
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or_default()
    }
}

impl Respond for FakeZone {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let Ok(mut records) = self.records.lock() else {
            return ResponseTemplate::new(500);
        };
        let segments: Vec<String> = request
            .url
            .path_segments()
            .map(|s| s.map(str::to_string).collect())
            .unwrap_or_default();

        match (request.method.as_str(), segments.get(3)) {
            ("GET", None) => {
                ResponseTemplate::new(200).set_body_json(success(Value::Array(records.clone())))
            }
            ("POST", None) => {
                let Ok(mut record) = serde_json::from_slice::<Value>(&request.body) else {
                    return ResponseTemplate::new(400).set_body_json(failure(1004, "DNS Validation Error"));
                };
                let id = uuid::Uuid::new_v4().simple().to_string();
                record["id"] = json!(id);
                record["created_on"] = json!("2024-05-01T12:00:00Z");
                records.push(record.clone());
                ResponseTemplate::new(200).set_body_json(success(record))
            }
            ("DELETE", Some(id)) => {
                let before = records.len();
                records.retain(|r| r["id"] != json!(id));
                if records.len() == before {
                    ResponseTemplate::new(404).set_body_json(failure(81044, "Record does not exist."))
                } else {
                    ResponseTemplate::new(200).set_body_json(success(json!({"id": id})))
                }
            }
            _ => ResponseTemplate::new(405).set_body_json(failure(7001, "Method not allowed")),
        }
    }
}
