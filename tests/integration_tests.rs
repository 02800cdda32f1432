use clap::Parser;
use httpmock::prelude::*;
use httpresource::adapters::{build_transport, http_client};
use httpresource::app::runner;
use httpresource::{CliConfig, ServerApi, TransportKind};
use serde_json::{json, Value};
use std::collections::HashMap;

async fn run_cli(args: &[&str]) -> httpresource::Result<Value> {
    let mut argv = vec!["httpresource"];
    argv.extend_from_slice(args);
    let cli = CliConfig::try_parse_from(argv).unwrap();
    let config = cli.effective_config()?;
    runner::run(&cli, &config).await
}

#[tokio::test]
async fn test_end_to_end_get_by_endpoint_name() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/clients")
            .query_param("type", "2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([{"id": 1, "name": "dev-1"}]));
    });

    let base = server.base_url();
    let value = run_cli(&["all-clients", "--server-addr", base.as_str(), "--param", "type=2"])
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(value[0]["name"], "dev-1");
}

#[tokio::test]
async fn test_end_to_end_fetch_post_forwards_raw_body() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/perm")
            .header("cache-control", "no-cache")
            .body(r#"{"read":1}"#);
        then.status(403).json_body(json!({"denied": true}));
    });

    let base = server.base_url();
    let value = run_cli(&[
        "perm",
        "--server-addr",
        base.as_str(),
        "--transport",
        "fetch",
        "--data",
        r#"{"read":1}"#,
    ])
    .await
    .unwrap();

    // fetch 風格的 POST 不檢查狀態碼
    api_mock.assert();
    assert_eq!(value["denied"], true);
}

#[tokio::test]
async fn test_end_to_end_client_post_rejects_error_status() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/client")
            .json_body(json!({"name": "x"}));
        then.status(500);
    });

    let base = server.base_url();
    let result = run_cli(&[
        "client",
        "--server-addr",
        base.as_str(),
        "--data",
        r#"{"name": "x"}"#,
    ])
    .await;

    api_mock.assert();
    assert_eq!(result.unwrap_err().status(), Some(500));
}

#[tokio::test]
async fn test_end_to_end_raw_url_swallows_failure() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/not-json");
        then.status(200).body("<html></html>");
    });

    let url = server.url("/not-json");
    let value = run_cli(&[url.as_str(), "--raw-url"]).await.unwrap();

    api_mock.assert();
    assert_eq!(value, Value::Null);
}

#[tokio::test]
async fn test_end_to_end_marker_returns_url() {
    let value = run_cli(&[
        "marker",
        "--server-addr",
        "http://localhost:3555",
        "--param",
        "id=9",
    ])
    .await
    .unwrap();

    assert_eq!(value, json!("http://localhost:3555/loc.png?id=9"));
}

#[tokio::test]
async fn test_end_to_end_unknown_endpoint() {
    let result = run_cli(&["/api/v2/nothing", "--server-addr", "http://localhost:3555"]).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_server_api_over_boxed_transport() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/info");
        then.status(200).json_body(json!({"uptime": 12}));
    });

    let client = http_client(&HashMap::new()).unwrap();
    for kind in [TransportKind::Fetch, TransportKind::Client] {
        let transport = build_transport(kind, client.clone(), &server.base_url());
        let api = ServerApi::new(transport, server.base_url());
        let value = api.stat(&[]).await.unwrap();
        assert_eq!(value["uptime"], 12);
    }

    api_mock.assert_hits(2);
}

#[tokio::test]
async fn test_end_to_end_marker_ignores_data() {
    let value = run_cli(&[
        "marker",
        "--server-addr",
        "http://localhost:3555",
        "--data",
        r#"{"x": 1}"#,
    ])
    .await
    .unwrap();

    assert_eq!(value, json!("http://localhost:3555/loc.png?"));
}
