//! End-to-end: real HTTP requests against a running viewer server.

use contexta_viewer::middleware::CORRELATION_HEADER;
use contexta_viewer::{AppState, DirectoryResolver, ViewerConfig};
use futures::future::join_all;
use serde_json::Value;
use test_support::common::user;
use test_support::support::server::{spawn_default_viewer, spawn_viewer};

async fn fetch_text(client: &reqwest::Client, url: String) -> String {
    client
        .get(url)
        .send()
        .await
        .expect("request failed")
        .text()
        .await
        .expect("body")
}

#[tokio::test]
async fn test_sequential_requests_bind_their_own_viewer() {
    let server = spawn_default_viewer().await;
    let client = reqwest::Client::new();

    let john = fetch_text(&client, server.url("/?name=John")).await;
    assert_eq!(john, "Hello, John!");

    let adam = fetch_text(&client, server.url("/?name=Adam")).await;
    assert_eq!(adam, "Hello, Adam!");

    let guest = fetch_text(&client, server.url("/")).await;
    assert_eq!(guest, "Hello, Guest!");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_overlapping_requests_never_cross() {
    let server = spawn_default_viewer().await;
    let client = reqwest::Client::new();

    let requests: Vec<(String, u64)> = (0..20)
        .map(|i| {
            let name = if i % 2 == 0 { "John" } else { "Adam" };
            (format!("{name}{i}"), (20 - i) * 3)
        })
        .collect();

    let bodies = join_all(requests.iter().map(|(name, delay)| {
        fetch_text(&client, server.url(&format!("/?name={name}&delay_ms={delay}")))
    }))
    .await;

    for ((name, _), body) in requests.iter().zip(bodies) {
        assert_eq!(body, format!("Hello, {name}!"));
    }
}

#[tokio::test]
async fn test_whoami_carries_correlation_id_end_to_end() {
    let server = spawn_default_viewer().await;
    let response = reqwest::Client::new()
        .get(server.url("/whoami?name=John"))
        .header(CORRELATION_HEADER, "corr-e2e")
        .send()
        .await
        .expect("request failed");

    assert_eq!(
        response
            .headers()
            .get(CORRELATION_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some("corr-e2e")
    );
    let json: Value = response.json().await.expect("json body");
    assert_eq!(json["viewer"]["name"], "John");
    assert_eq!(json["correlation_id"], "corr-e2e");
}

#[tokio::test]
async fn test_unknown_viewer_is_rejected_by_directory() {
    let state = AppState::new(&ViewerConfig::default())
        .with_resolver(DirectoryResolver::new().with_user(user("1", "John")));
    let server = spawn_viewer(state).await;
    let client = reqwest::Client::new();

    let ok = client.get(server.url("/?name=John")).send().await.expect("request failed");
    assert_eq!(ok.status(), reqwest::StatusCode::OK);

    let rejected = client.get(server.url("/?name=Adam")).send().await.expect("request failed");
    assert_eq!(rejected.status(), reqwest::StatusCode::UNAUTHORIZED);
}
