//! Integration tests for the verse fetch flow against a mock server.
//!
//! Covers the contract of the fetch sequence: both texts update on success,
//! a rejected response leaves prior text intact and clears the loading flag,
//! an empty translation id issues no network call, and a malformed envelope
//! is reported instead of being applied.

mod common;

use ayah_card::app::NoticeKind;
use ayah_card::error::FetchError;
use ayah_card::quran::{QuranClient, SOURCE_EDITION};
use common::{app_for_server, drain_messages, mount_ayah, mount_ayah_error};
use wiremock::MockServer;

#[tokio::test]
async fn test_load_updates_both_texts() {
    let server = MockServer::start().await;
    mount_ayah(&server, "1", "1", SOURCE_EDITION, "بِسْمِ اللَّهِ").await;
    mount_ayah(&server, "1", "1", "en.asad", "In the name of God").await;

    let mut app = app_for_server(&server);
    app.state.set_chapter("1");
    app.state.set_verse("1");
    app.state.set_translation("en.asad");

    app.submit_fetch();
    assert!(app.is_loading());

    drain_messages(&mut app, 2).await;

    assert_eq!(app.content.source_text, "بِسْمِ اللَّهِ");
    assert_eq!(app.content.translation_text, "In the name of God");
    assert!(!app.is_loading());
    assert!(app.notice.is_none());
}

#[tokio::test]
async fn test_rejected_fetch_keeps_prior_text() {
    let server = MockServer::start().await;
    mount_ayah_error(&server, "2", "999", SOURCE_EDITION, 500).await;

    let mut app = app_for_server(&server);
    app.content.source_text = "previously loaded".into();
    app.state.set_chapter("2");
    app.state.set_verse("999");
    app.state.set_translation("");

    app.submit_fetch();
    drain_messages(&mut app, 1).await;

    assert_eq!(app.content.source_text, "previously loaded");
    assert!(!app.is_loading());
    let notice = app.notice.as_ref().expect("user-visible notice");
    assert_eq!(notice.kind, NoticeKind::Error);
}

#[tokio::test]
async fn test_empty_translation_issues_no_call() {
    let server = MockServer::start().await;
    mount_ayah(&server, "1", "1", SOURCE_EDITION, "text").await;

    let mut app = app_for_server(&server);
    app.state.set_chapter("1");
    app.state.set_verse("1");
    app.state.set_translation("");
    app.content.translation_text = "stale translation".into();

    app.submit_fetch();
    // Translation resolves synchronously to empty
    assert_eq!(app.content.translation_text, "");

    drain_messages(&mut app, 1).await;
    assert_eq!(app.content.source_text, "text");

    // Exactly one request reached the server: the source fetch
    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.path().ends_with(SOURCE_EDITION));
}

#[tokio::test]
async fn test_malformed_envelope_is_rejected() {
    let server = MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(
            wiremock::ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": { "number": 7 } })),
        )
        .mount(&server)
        .await;

    let mut app = app_for_server(&server);
    app.content.source_text = "kept".into();
    app.state.set_translation("");
    app.state.set_verse("1");

    app.submit_fetch();
    drain_messages(&mut app, 1).await;

    assert_eq!(app.content.source_text, "kept");
    assert!(app.notice.is_some());
}

#[tokio::test]
async fn test_client_reports_remote_rejection() {
    let server = MockServer::start().await;
    mount_ayah_error(&server, "3", "1", SOURCE_EDITION, 404).await;

    let client = QuranClient::with_base_url(server.uri());
    let result = client.fetch_verse_text("3", "1").await;
    match result {
        Err(FetchError::RemoteRejected { status }) => assert_eq!(status, 404),
        other => panic!("expected RemoteRejected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_client_translation_success() {
    let server = MockServer::start().await;
    mount_ayah(&server, "1", "2", "en.pickthall", "Praise be to Allah").await;

    let client = QuranClient::with_base_url(server.uri());
    let text = client
        .fetch_translation_text("1", "2", "en.pickthall")
        .await
        .expect("fetch succeeds");
    assert_eq!(text, "Praise be to Allah");
}
