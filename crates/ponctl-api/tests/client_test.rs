#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ponctl_api::{ApiClient, Error, OnuLookup, ProvisionPayload, Session, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let session = Session::bearer(SecretString::from("test-token".to_owned()));
    let client = ApiClient::with_client(reqwest::Client::new(), base_url, session);
    (server, client)
}

// ── Session tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc123",
            "token_type": "Bearer"
        })))
        .mount(&server)
        .await;

    let password = SecretString::from("hunter2".to_owned());
    let session = Session::login(
        &base_url,
        "tech@example.net",
        &password,
        &TransportConfig::default(),
    )
    .await
    .unwrap();

    // The issued token must be applied to subsequent requests.
    let client = ApiClient::with_client(reqwest::Client::new(), base_url, session);
    Mock::given(method("GET"))
        .and(path("/device"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    assert!(client.list_devices().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_failure() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let password = SecretString::from("wrong".to_owned());
    let result = Session::login(
        &base_url,
        "tech@example.net",
        &password,
        &TransportConfig::default(),
    )
    .await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

// ── Device tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_devices() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/device"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "OLT-A", "ip": "10.0.0.1" },
            { "id": 2, "name": "OLT-B", "ip": "10.0.0.2" }
        ])))
        .mount(&server)
        .await;

    let devices = client.list_devices().await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].id, 1);
    assert_eq!(devices[0].name, "OLT-A");
    assert_eq!(devices[1].ip, "10.0.0.2");
}

#[tokio::test]
async fn test_device_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/device/1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "online" })))
        .mount(&server)
        .await;

    assert_eq!(client.device_status(1).await.unwrap(), "online");
}

#[tokio::test]
async fn test_device_services() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/device/3/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 10, "vlan": 100 },
            { "id": 11, "vlan": 200 }
        ])))
        .mount(&server)
        .await;

    let services = client.device_services(3).await.unwrap();
    assert_eq!(services.len(), 2);
    assert_eq!(services[0].id, 10);
    assert_eq!(services[1].vlan, 200);
}

// ── ONU lookup tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_find_onu_by_sn_found() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/device/1/onu/search/sn"))
        .and(body_json(json!({ "sn": "HWTC11223344" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "FSP": "0/1/2",
            "SN": "HWTC11223344",
            "ONTID": "5",
            "Description": "customer-17",
            "status": "online"
        })))
        .mount(&server)
        .await;

    let lookup = client.find_onu_by_sn(1, "HWTC11223344").await.unwrap();
    let OnuLookup::Found(record) = lookup else {
        panic!("expected Found, got NotFound");
    };
    assert_eq!(record.fsp, "0/1/2");
    assert_eq!(record.ont_id, "5");
}

#[tokio::test]
async fn test_find_onu_by_sn_not_found_sentinel() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/device/1/onu/search/sn"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "detail": "ONU not found" })),
        )
        .mount(&server)
        .await;

    let lookup = client.find_onu_by_sn(1, "ABC123").await.unwrap();
    assert!(
        matches!(lookup, OnuLookup::NotFound { ref detail } if detail == "ONU not found"),
        "expected NotFound sentinel, got: {lookup:?}"
    );
}

// ── Discovery tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_autofind_onus() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/device/1/onu/autofind"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "FSP": "0/1/2", "SN": "HWTC0001" },
            { "FSP": "0/1/3", "SN": "HWTC0002" }
        ])))
        .mount(&server)
        .await;

    let found = client.autofind_onus(1).await.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[1].sn, "HWTC0002");
}

#[tokio::test]
async fn test_search_onus_empty_query_is_dispatched() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/onu/search"))
        .and(query_param("query", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let results = client.search_onus("").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_onus_by_description() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/onu/search"))
        .and(query_param("query", "customer-17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "FSP": "0/1/2",
            "SN": "HWTC11223344",
            "ONTID": 5,
            "Description": "customer-17"
        }])))
        .mount(&server)
        .await;

    let results = client.search_onus("customer-17").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].description, "customer-17");
}

// ── Mutation tests ──────────────────────────────────────────────────

#[tokio::test]
async fn test_add_onu() {
    let (server, client) = setup().await;

    let payload = ProvisionPayload {
        sn: "HWTC0001".into(),
        fsp: "0/1/2".into(),
        interface: "0/1".into(),
        port: "2".into(),
        service_id: 10,
        description: "new customer".into(),
        nativevlan: false,
    };

    Mock::given(method("POST"))
        .and(path("/device/1/onu/add"))
        .and(body_json(json!({
            "SN": "HWTC0001",
            "FSP": "0/1/2",
            "interface": "0/1",
            "port": "2",
            "service_id": 10,
            "description": "new customer",
            "nativevlan": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ONU added" })))
        .mount(&server)
        .await;

    let ack = client.add_onu(1, &payload).await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("ONU added"));
}

#[tokio::test]
async fn test_delete_onu_sends_body() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/device/1/onu/delete"))
        .and(body_json(json!({
            "FSP": "0/1/2",
            "ONTID": "5",
            "SN": "HWTC0001",
            "Description": "customer-17"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "deleted" })))
        .mount(&server)
        .await;

    let ack = client
        .delete_onu(1, "0/1/2", "5", "HWTC0001", "customer-17")
        .await
        .unwrap();
    assert_eq!(ack.message.as_deref(), Some("deleted"));
}

#[tokio::test]
async fn test_reboot_onu() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/device/1/onu/reset"))
        .and(body_json(json!({ "FSP": "0/1/2", "ONTID": "5" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "reboot issued" })),
        )
        .mount(&server)
        .await;

    let ack = client.reboot_onu(1, "0/1/2", "5").await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("reboot issued"));
}

#[tokio::test]
async fn test_optical_info() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/device/1/onu/optical"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "ONU_RX": -14.97
        })))
        .mount(&server)
        .await;

    let optical = client.optical_info(1, "0/1/2", "5").await.unwrap();
    assert_eq!(optical.onu_rx, Some(-14.97));
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_session_expired() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_devices().await;
    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_server_error_preserves_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/device/1/status"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    match client.device_status(1).await {
        Err(Error::Api { status, ref message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("boom"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/device"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client.list_devices().await;
    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("not json"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
