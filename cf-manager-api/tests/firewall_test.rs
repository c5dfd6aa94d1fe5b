//! Firewall rule operations against a mocked Cloudflare API.

mod common;

use cf_manager_api::{ApiError, FailureKind, ZoneManager};
use common::{ZONE_ID, client_for, failure, success};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rules_path() -> String {
    format!("/zones/{ZONE_ID}/firewall/rules")
}

#[tokio::test]
async fn block_ip_submits_single_rule_with_exact_expression() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(rules_path()))
        .and(body_json(json!([{
            "action": "block",
            "priority": 1,
            "paused": false,
            "description": "Blocked IP 1.2.3.4",
            "filter": {"expression": "(ip.src eq \"1.2.3.4\")"}
        }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([{
            "id": "rule-1",
            "paused": false,
            "description": "Blocked IP 1.2.3.4",
            "action": "block",
            "priority": 1,
            "filter": {"id": "filter-1", "expression": "(ip.src eq \"1.2.3.4\")", "paused": false}
        }]))))
        .expect(1)
        .mount(&server)
        .await;

    let rules = require_ok!(client_for(&server).block_ip("1.2.3.4").await);
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].id, "rule-1");

    let received = server.received_requests().await.unwrap_or_default();
    let sent: Value = require_ok!(serde_json::from_slice::<Value>(&received[0].body));
    assert_eq!(sent[0]["filter"]["expression"], "(ip.src eq \"1.2.3.4\")");
}

#[tokio::test]
async fn block_ip_accepts_created() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(rules_path()))
        .respond_with(ResponseTemplate::new(201).set_body_json(success(json!([]))))
        .mount(&server)
        .await;

    let rules = require_ok!(client_for(&server).block_ip("2001:db8::7").await);
    assert!(rules.is_empty());
}

#[tokio::test]
async fn block_ip_rejects_non_address_without_request() {
    let server = MockServer::start().await;

    let err = require_err!(client_for(&server)
        .block_ip("1.2.3.4\" or ip.src ne \"0.0.0.0")
        .await
        );
    assert_eq!(err.kind(), FailureKind::Client);
    assert!(matches!(err, ApiError::InvalidInput { ref param, .. } if param == "ip"));

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn unblock_deletes_rule_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/rule-1", rules_path())))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!({"id": "rule-1"}))))
        .expect(1)
        .mount(&server)
        .await;

    let deleted = require_ok!(client_for(&server).unblock_ip("rule-1").await);
    assert_eq!(deleted.id, "rule-1");
}

#[tokio::test]
async fn unblock_unknown_rule_is_api_failure_not_transport() {
    let server = MockServer::start().await;
    let body = failure(10007, "firewallrules.api.not_found");
    Mock::given(method("DELETE"))
        .and(path(format!("{}/missing", rules_path())))
        .respond_with(ResponseTemplate::new(404).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let err = require_err!(client_for(&server).unblock_ip("missing").await);
    assert_eq!(err.kind(), FailureKind::Api);
    assert_eq!(err.api_body(), Some(&body));
}

#[tokio::test]
async fn unblock_with_null_result_echoes_requested_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(Value::Null)))
        .mount(&server)
        .await;

    let deleted = require_ok!(client_for(&server).unblock_ip("rule-9").await);
    assert_eq!(deleted.id, "rule-9");
}

#[tokio::test]
async fn list_firewall_rules_exposes_target_value_and_mode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(rules_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(json!([
            {
                "id": "rule-a",
                "mode": "block",
                "configuration": {"target": "ip", "value": "198.51.100.4"},
                "paused": false
            },
            {
                "id": "rule-b",
                "action": "challenge",
                "priority": 5,
                "filter": {"expression": "(ip.src eq \"203.0.113.9\")"}
            }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let rules = require_ok!(client_for(&server).list_firewall_rules().await);
    assert_eq!(rules.len(), 2);
    assert_eq!(
        rules[0].to_string(),
        "Rule ID: rule-a | Target: ip | Value: 198.51.100.4 | Mode: block"
    );
    assert_eq!(rules[1].mode_or_action(), "challenge");
    assert_eq!(rules[1].priority, Some(5));
}
