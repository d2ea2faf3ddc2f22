//! Common test utilities for integration tests.
//!
//! Provides an app factory pointed at a mock verse server and helpers for
//! mounting ayah endpoints and draining the async message channel.

use ayah_card::app::{App, AppMessage};
use ayah_card::config::Config;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config pointing the verse client at a mock server.
pub fn test_config(base_url: &str) -> Config {
    Config {
        api_base_url: Some(base_url.to_string()),
        ..Config::default()
    }
}

/// App wired to the given mock server.
pub fn app_for_server(server: &MockServer) -> App {
    App::with_config(&test_config(&server.uri()))
}

/// Mount a 200 response for one ayah/edition with the standard envelope.
pub async fn mount_ayah(server: &MockServer, chapter: &str, verse: &str, edition: &str, text: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/ayah/{}:{}/{}", chapter, verse, edition)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "status": "OK",
            "data": { "number": 1, "text": text }
        })))
        .mount(server)
        .await;
}

/// Mount a failure status for one ayah/edition.
pub async fn mount_ayah_error(
    server: &MockServer,
    chapter: &str,
    verse: &str,
    edition: &str,
    status: u16,
) {
    Mock::given(method("GET"))
        .and(path(format!("/ayah/{}:{}/{}", chapter, verse, edition)))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Receive and apply `count` messages from the app's channel.
pub async fn drain_messages(app: &mut App, count: usize) {
    let mut rx = app.message_rx.take().expect("message receiver present");
    let mut received: Vec<AppMessage> = Vec::with_capacity(count);
    for _ in 0..count {
        let message = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
            .await
            .expect("message arrived in time")
            .expect("channel open");
        received.push(message);
    }
    app.message_rx = Some(rx);
    for message in received {
        app.apply_message(message);
    }
}
