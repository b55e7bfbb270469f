// Lifecycle tests for the async facade against an in-memory switch.
#![allow(clippy::unwrap_used)]

mod common;

use aos_sw_api::models::{PortMode, Vlan, VlanPort};
use aos_sw_api::{AsyncClient, Error, SessionState};
use common::{FakeTransport, Reply, config};
use pretty_assertions::assert_eq;
use reqwest::Method;
use reqwest::header::CONNECTION;
use serde_json::json;

fn client(fake: &FakeTransport) -> AsyncClient<FakeTransport> {
    AsyncClient::with_transport(fake.clone(), &config()).unwrap()
}

fn call(method: Method, path: &str) -> (Method, String) {
    (method, path.to_owned())
}

#[tokio::test]
async fn scope_logs_in_runs_body_and_releases_once() {
    let fake = FakeTransport::new();
    fake.on(
        Method::GET,
        "vlans",
        Reply::json(
            200,
            json!({
                "collection_result": { "total_elements_count": 2, "filtered_elements_count": 2 },
                "vlan_element": [
                    { "vlan_id": 1, "name": "DEFAULT_VLAN" },
                    { "vlan_id": 20, "name": "voice", "is_voice_enabled": true }
                ]
            }),
        ),
    );

    let vlans = client(&fake)
        .scope(async |client| client.vlan.list().await)
        .await
        .unwrap();

    let ids: Vec<u16> = vlans.vlans.iter().map(|v| v.vlan_id).collect();
    assert_eq!(ids, vec![1, 20]);
    assert_eq!(fake.closes(), 1);
    assert_eq!(
        fake.calls(),
        vec![
            call(Method::POST, "login-sessions"),
            call(Method::GET, "vlans"),
            call(Method::DELETE, "login-sessions"),
        ]
    );
}

#[tokio::test]
async fn rejected_login_fails_entry_and_releases_once() {
    let fake = FakeTransport::new();
    fake.on(
        Method::POST,
        "login-sessions",
        Reply::json(401, json!({ "message": "Invalid credentials" })),
    );

    let mut client = client(&fake);
    let err = client.enter().await.unwrap_err();

    assert!(matches!(err, Error::Authentication { .. }));
    assert_eq!(client.state(), SessionState::Unauthenticated);
    assert_eq!(fake.closes(), 1);
}

#[tokio::test]
async fn auto_logout_off_skips_logout_but_releases() {
    let fake = FakeTransport::new();
    let config = config().with_auto_logout(false);
    let mut client = AsyncClient::with_transport(fake.clone(), &config).unwrap();

    client.enter().await.unwrap();
    client.exit().await.unwrap();

    assert_eq!(fake.calls(), vec![call(Method::POST, "login-sessions")]);
    assert_eq!(fake.closes(), 1);
}

#[tokio::test]
async fn logout_network_failure_keeps_body_value_and_releases() {
    let fake = FakeTransport::new();
    fake.on(Method::DELETE, "login-sessions", Reply::ConnectionError);

    let result = client(&fake)
        .scope(async |_| Ok::<_, Error>(42))
        .await;

    assert_eq!(result.unwrap(), 42);
    assert_eq!(fake.closes(), 1);
    assert_eq!(fake.calls().last(), Some(&call(Method::DELETE, "login-sessions")));
}

#[tokio::test]
async fn body_error_still_tears_down() {
    let fake = FakeTransport::new();
    fake.on(
        Method::POST,
        "vlans",
        Reply::json(400, json!({ "message": "VLAN name already in use" })),
    );

    let result = client(&fake)
        .scope(async |client| client.vlan.create(&Vlan::new(30, "iot")).await)
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(
        fake.calls().last(),
        Some(&call(Method::DELETE, "login-sessions"))
    );
    assert_eq!(fake.closes(), 1);
}

#[tokio::test]
async fn every_request_carries_connection_close() {
    let fake = FakeTransport::new();
    let membership = VlanPort {
        vlan_id: 20,
        port_id: "A1".into(),
        port_mode: PortMode::Tagged,
    };
    fake.on(
        Method::POST,
        "vlans-ports",
        Reply::json(201, serde_json::to_value(&membership).unwrap()),
    );

    let created = client(&fake)
        .scope(async |client| {
            client.mac_table.list().await?;
            client.vlan_port.create(&membership).await
        })
        .await
        .unwrap();

    assert_eq!(created, membership);
    let requests = fake.requests();
    assert_eq!(requests.len(), 4);
    assert!(requests.iter().all(|r| r.headers[CONNECTION] == "close"));
    assert_eq!(
        requests[2].body,
        Some(json!({ "vlan_id": 20, "port_id": "A1", "port_mode": "POM_TAGGED_STATIC" }))
    );
}

#[tokio::test]
async fn resource_call_before_entry_is_refused_locally() {
    let fake = FakeTransport::new();
    let client = client(&fake);

    let err = client.port.get("A1").await.unwrap_err();

    assert!(matches!(err, Error::NotAuthenticated));
    assert!(fake.requests().is_empty());
}

#[tokio::test]
async fn close_session_releases_without_logout() {
    let fake = FakeTransport::new();
    let mut client = client(&fake);
    client.enter().await.unwrap();

    client.close_session();
    client.exit().await.unwrap();

    assert_eq!(fake.closes(), 1);
    assert_eq!(fake.calls(), vec![call(Method::POST, "login-sessions")]);
}
