#![allow(clippy::unwrap_used)]
// Integration tests for the discovery controller's mode exclusivity and
// failure policy.

mod common;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ponctl_core::{DiscoveryController, DiscoveryResults};

async fn mount_autofind(server: &MockServer, device_id: u64, rows: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/device/{device_id}/onu/autofind")))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(server)
        .await;
}

#[tokio::test]
async fn autofind_normalizes_partial_rows() {
    let (server, client) = common::setup().await;
    mount_autofind(
        &server,
        1,
        json!([
            { "FSP": "0/1/2", "SN": "HWTC0001" },
            { "FSP": "0/1/3", "SN": "HWTC0002" }
        ]),
    )
    .await;

    let mut discovery = DiscoveryController::new(client);
    let results = discovery.autofind(1).await;

    let DiscoveryResults::Autofind(rows) = results else {
        panic!("expected autofind results, got {results:?}");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].sn, "HWTC0001");
    // Fields autofind cannot know are synthesized, not absent.
    assert_eq!(rows[0].ont_id, "N/A");
    assert_eq!(rows[0].description, "N/A");
    assert!(!discovery.autofind_loading());
}

#[tokio::test]
async fn starting_search_clears_autofind_rows() {
    let (server, client) = common::setup().await;
    mount_autofind(&server, 1, json!([{ "FSP": "0/1/2", "SN": "HWTC0001" }])).await;
    Mock::given(method("GET"))
        .and(path("/onu/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "FSP": "0/2/1",
            "SN": "HWTC9999",
            "ONTID": 3,
            "Description": "customer-9"
        }])))
        .mount(&server)
        .await;

    let mut discovery = DiscoveryController::new(client);
    discovery.autofind(1).await;
    assert!(matches!(discovery.results(), DiscoveryResults::Autofind(_)));

    let results = discovery.search("HWTC9999").await;
    let DiscoveryResults::Search(rows) = results else {
        panic!("autofind rows survived a search, got {results:?}");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "customer-9");
}

#[tokio::test]
async fn starting_autofind_clears_search_rows() {
    let (server, client) = common::setup().await;
    Mock::given(method("GET"))
        .and(path("/onu/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "FSP": "0/2/1", "SN": "HWTC9999", "ONTID": 3
        }])))
        .mount(&server)
        .await;
    mount_autofind(&server, 1, json!([])).await;

    let mut discovery = DiscoveryController::new(client);
    discovery.search("HWTC9999").await;
    assert!(matches!(discovery.results(), DiscoveryResults::Search(_)));

    let results = discovery.autofind(1).await;
    assert!(
        matches!(results, DiscoveryResults::Autofind(rows) if rows.is_empty()),
        "search rows survived an autofind: {results:?}"
    );
}

#[tokio::test]
async fn empty_query_is_dispatched() {
    let (server, client) = common::setup().await;
    Mock::given(method("GET"))
        .and(path("/onu/search"))
        .and(query_param("query", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let mut discovery = DiscoveryController::new(client);
    discovery.search("").await;
}

#[tokio::test]
async fn transport_failure_resolves_to_empty_results() {
    let (server, client) = common::setup().await;
    Mock::given(method("GET"))
        .and(path("/device/1/onu/autofind"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let mut discovery = DiscoveryController::new(client);
    let results = discovery.autofind(1).await;

    assert!(
        matches!(results, DiscoveryResults::Autofind(rows) if rows.is_empty()),
        "discovery failure must resolve to an empty set, got {results:?}"
    );
    assert!(!discovery.autofind_loading());
}
