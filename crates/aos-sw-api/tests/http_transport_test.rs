#![allow(clippy::unwrap_used)]
// Integration tests for the reqwest transports using wiremock.

use aos_sw_api::{
    AsyncClient, Client, Credentials, DeviceEndpoint, Error, Scheme, SwitchConfig,
};
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

fn switch_config(server: &MockServer) -> SwitchConfig {
    let endpoint =
        DeviceEndpoint::new(server.address().to_string(), 7).with_scheme(Scheme::Http);
    let secret: SecretString = "secret".to_string().into();
    SwitchConfig::new(endpoint, Credentials::new("manager", secret))
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/rest/v7/login-sessions"))
        .and(body_json(json!({ "userName": "manager", "password": "secret" })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "uri": "/login-sessions", "cookie": "sessionId=wm123" })),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_logout(server: &MockServer) {
    Mock::given(method("DELETE"))
        .and(path("/rest/v7/login-sessions"))
        .and(header("cookie", "sessionId=wm123"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(server)
        .await;
}

// ── Async transport ─────────────────────────────────────────────────

#[tokio::test]
async fn test_async_session_round_trip() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_logout(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v7/system/status"))
        .and(header("cookie", "sessionId=wm123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "edge-sw3",
            "serial_number": "SG00XYZ",
            "firmware_version": "YA.16.11.0002",
            "product_model": "2930F-24G"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let status = AsyncClient::new(&switch_config(&server))
        .unwrap()
        .scope(async |client| client.system.status().await)
        .await
        .unwrap();

    assert_eq!(status.name, "edge-sw3");
    assert_eq!(status.product_model.as_deref(), Some("2930F-24G"));
}

#[tokio::test]
async fn test_async_login_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v7/login-sessions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Authentication failed"))
        .mount(&server)
        .await;

    let result = AsyncClient::new(&switch_config(&server))
        .unwrap()
        .scope(async |client| client.vlan.list().await)
        .await;

    assert!(
        matches!(result, Err(Error::Authentication { ref message }) if message.contains("401")),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_async_resource_error_carries_status_and_body() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_logout(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v7/vlans/1"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("{\"message\":\"Cannot delete default VLAN\"}"),
        )
        .mount(&server)
        .await;

    let result = AsyncClient::new(&switch_config(&server))
        .unwrap()
        .scope(async |client| client.vlan.delete(1).await)
        .await;

    match result {
        Err(Error::ResourceOperation { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("default VLAN"));
        }
        other => panic!("expected ResourceOperation, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_async_cli_command_is_decoded() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_logout(&server).await;

    Mock::given(method("POST"))
        .and(path("/rest/v7/cli"))
        .and(body_json(json!({ "cmd": "show version" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cmd": "show version",
            "result_base64_encoded": "SW1hZ2Ugc3RhbXA6IFlBLjE2LjExCg==",
            "status": "CCS_SUCCESS",
            "error_msg": ""
        })))
        .mount(&server)
        .await;

    let output = AsyncClient::new(&switch_config(&server))
        .unwrap()
        .scope(async |client| client.cli.run("show version").await)
        .await
        .unwrap();

    assert!(output.is_success());
    assert_eq!(output.output, "Image stamp: YA.16.11\n");
}

// ── Blocking transport ──────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_session_round_trip() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_logout(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v7/ports"))
        .and(header("cookie", "sessionId=wm123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collection_result": { "total_elements_count": 1, "filtered_elements_count": 1 },
            "port_element": [{
                "id": "1",
                "name": "uplink",
                "is_port_enabled": true,
                "is_port_up": true,
                "trunk_mode": "PTT_NONE"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = switch_config(&server);
    let ports = tokio::task::spawn_blocking(move || {
        Client::new(&config)
            .unwrap()
            .scope(|client| client.port.list().send())
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(ports.ports.len(), 1);
    assert_eq!(ports.ports[0].name, "uplink");
    assert!(ports.ports[0].is_port_up);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blocking_unreachable_switch_fails_login() {
    // Nothing listens on the discard port.
    let endpoint = DeviceEndpoint::new("127.0.0.1:9", 7).with_scheme(Scheme::Http);
    let secret: SecretString = "secret".to_string().into();
    let config = SwitchConfig::new(endpoint, Credentials::new("manager", secret));

    let result = tokio::task::spawn_blocking(move || {
        Client::new(&config)
            .unwrap()
            .scope(|client| client.system.get().send())
    })
    .await
    .unwrap();

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}
