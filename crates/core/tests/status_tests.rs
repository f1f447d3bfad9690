//! Status monitor integration tests
use npmscrape_core::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("../../tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> NpmClient {
    NpmClient::with_config(ClientConfig::builder().endpoints(Endpoints::with_root(&server.uri())).build()).unwrap()
}

#[tokio::test]
async fn test_summary_is_passed_through() {
    let server = MockServer::start().await;
    let body = fixture("status_summary.json");
    Mock::given(method("GET"))
        .and(path("/status/api/v2/summary.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let summary = client.status().summary().await.unwrap();

    let expected: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(summary, expected);
    assert_eq!(summary["status"]["indicator"], "none");
    assert_eq!(summary["components"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_every_resource_is_reachable() {
    let server = MockServer::start().await;
    for resource in StatusResource::ALL {
        Mock::given(method("GET"))
            .and(path(format!("/status/{}", resource.path())))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "resource": resource.path() })))
            .expect(1)
            .mount(&server)
            .await;
    }
    let client = client_for(&server);
    let status = client.status();

    let values = [
        status.overall().await.unwrap(),
        status.summary().await.unwrap(),
        status.components().await.unwrap(),
        status.unresolved_incidents().await.unwrap(),
        status.incidents().await.unwrap(),
        status.scheduled_maintenances().await.unwrap(),
        status.upcoming_scheduled_maintenances().await.unwrap(),
        status.active_scheduled_maintenances().await.unwrap(),
    ];

    for (value, resource) in values.iter().zip(StatusResource::ALL) {
        assert_eq!(value["resource"], resource.path());
    }
}

#[tokio::test]
async fn test_malformed_json_is_monitor_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status/api/v2/components.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.status().components().await;
    assert!(matches!(result, Err(NpmError::MonitorUnavailable(_))));
}

#[tokio::test]
async fn test_unreachable_monitor() {
    let config = ClientConfig::builder().endpoints(Endpoints::with_root("http://127.0.0.1:1")).build();
    let client = NpmClient::with_config(config).unwrap();

    let result = client.status().overall().await;
    assert!(matches!(result, Err(NpmError::MonitorUnavailable(_))));
}

#[tokio::test]
async fn test_incident_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status/incidents/x1y2z3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("incident.html")))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let detail = client.status().incident("x1y2z3").await.unwrap();

    assert_eq!(detail.message, "Increased error rates on package publish");
    let kinds: Vec<_> = detail.actions.iter().map(|a| a.kind.as_str()).collect();
    assert_eq!(kinds, vec!["Resolved", "Monitoring", "Investigating"]);
    assert!(detail.actions.iter().all(|a| !a.summary.is_empty() && !a.timestamp.is_empty()));
}

#[tokio::test]
async fn test_incident_empty_uuid_makes_no_request() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let result = client.status().incident("").await;
    assert!(matches!(result, Err(NpmError::InvalidArgument(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_incident_not_found_is_monitor_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = client_for(&server);

    match client.status().incident("missing").await {
        Err(err @ NpmError::MonitorUnavailable(_)) => assert!(err.to_string().contains("missing")),
        other => panic!("expected MonitorUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_incident_whitespace_uuid_is_requested() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.status().incident(" ").await;
    assert!(matches!(result, Err(NpmError::MonitorUnavailable(_))));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
