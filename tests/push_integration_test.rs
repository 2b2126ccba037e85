use anyhow::Result;
use httpmock::prelude::*;
use std::time::Duration;
use token_pusher::config::DEFAULT_ADMIN_KEY;
use token_pusher::{HttpTokenSink, PushError, PusherSettings, TokenPusher};

fn pusher_for(settings: &PusherSettings) -> Result<TokenPusher<HttpTokenSink>> {
    let sink = HttpTokenSink::new(settings)?;
    Ok(TokenPusher::new(sink).with_fail_on_http_error(settings.fail_on_http_error))
}

#[tokio::test]
async fn test_end_to_end_push_with_mock_server() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/admin/set_token")
            .header("content-type", "application/json")
            .header("x-admin-key", DEFAULT_ADMIN_KEY)
            .json_body(serde_json::json!({ "access_token": "abc123" }));
        then.status(200).json_body(serde_json::json!({
            "status": "ok",
            "message": "token saved and fetch started"
        }));
    });

    let settings = PusherSettings::new(server.url("/admin/set_token"), DEFAULT_ADMIN_KEY);
    let response = pusher_for(&settings)?.push("abc123").await?;

    api_mock.assert_hits(1);
    assert_eq!(response.status, 200);
    let body: serde_json::Value = serde_json::from_slice(&response.body)?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_token_with_json_special_characters_arrives_intact() -> Result<()> {
    let token = "quote\"back\\slash\nnewline";

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/admin/set_token")
            .header("x-admin-key", DEFAULT_ADMIN_KEY)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({ "access_token": token }));
        then.status(200).body("ok");
    });

    let settings = PusherSettings::new(server.url("/admin/set_token"), DEFAULT_ADMIN_KEY);
    pusher_for(&settings)?.push(token).await?;

    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_binary_response_body_is_untouched() -> Result<()> {
    let raw: Vec<u8> = vec![0x66, 0xff, 0xfe, 0x6f];

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/admin/set_token");
        then.status(200).body(raw.clone());
    });

    let settings = PusherSettings::new(server.url("/admin/set_token"), DEFAULT_ADMIN_KEY);
    let response = pusher_for(&settings)?.push("abc123").await?;

    api_mock.assert();
    assert_eq!(response.body, raw);
    Ok(())
}

#[tokio::test]
async fn test_empty_token_makes_no_request() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/admin/set_token");
        then.status(200);
    });

    let settings = PusherSettings::new(server.url("/admin/set_token"), DEFAULT_ADMIN_KEY);
    let err = pusher_for(&settings)?.push("").await.unwrap_err();

    assert!(matches!(err, PushError::UsageError { .. }));
    api_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_custom_admin_key_is_sent() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/admin/set_token")
            .header("x-admin-key", "rotated-key");
        then.status(200).body("ok");
    });

    let settings = PusherSettings::new(server.url("/admin/set_token"), "rotated-key");
    pusher_for(&settings)?.push("abc123").await?;

    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_server_rejection_only_fails_when_requested() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/admin/set_token");
        then.status(400).json_body(serde_json::json!({ "detail": "Bad token" }));
    });

    let lenient = PusherSettings::new(server.url("/admin/set_token"), DEFAULT_ADMIN_KEY);
    let response = pusher_for(&lenient)?.push("abc").await?;
    assert_eq!(response.status, 400);

    let strict = lenient.clone().with_fail_on_http_error(true);
    let err = pusher_for(&strict)?.push("abc").await.unwrap_err();
    match err {
        PushError::ServerRejected { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("Bad token"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    api_mock.assert_hits(2);
    Ok(())
}

#[tokio::test]
async fn test_configured_timeout_surfaces_as_transport_error() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/admin/set_token");
        then.status(200).delay(Duration::from_secs(3)).body("late");
    });

    let settings = PusherSettings::new(server.url("/admin/set_token"), DEFAULT_ADMIN_KEY)
        .with_timeout_seconds(1);
    let err = pusher_for(&settings)?.push("abc123").await.unwrap_err();

    match &err {
        PushError::TransportError(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.exit_code(), 2);
    api_mock.assert_hits(1);
    Ok(())
}
