use anyhow::Result;
use httpmock::prelude::*;
use sendgrid_unsubscribe::{
    stringify_email_errors, Credentials, LocalStorage, SendGridClient, UnsubscribeEngine,
    UnsubscribeError,
};
use serde_json::json;
use tempfile::TempDir;

fn client_for(server: &MockServer) -> SendGridClient {
    SendGridClient::new(
        server.url("/api/newsletter/lists/email/delete.json"),
        "test_list",
        Credentials::new("test_api_user", "test_api_key"),
    )
}

async fn write_users(dir: &TempDir, contents: &str) -> Result<()> {
    tokio::fs::write(dir.path().join("users.txt"), contents).await?;
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_mixed_batch() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_users(&temp_dir, "a@x.com\nbad\n\nc@y.com\n").await?;

    let server = MockServer::start_async().await;
    let removed_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/newsletter/lists/email/delete.json")
                .x_www_form_urlencoded_tuple("list", "test_list")
                .x_www_form_urlencoded_tuple("api_user", "test_api_user")
                .x_www_form_urlencoded_tuple("api_key", "test_api_key")
                .x_www_form_urlencoded_tuple("email", "a@x.com");
            then.status(200).json_body(json!({"removed": 1}));
        })
        .await;
    let missing_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/newsletter/lists/email/delete.json")
                .x_www_form_urlencoded_tuple("email", "c@y.com");
            then.status(200).json_body(json!({"errors": ["not found"]}));
        })
        .await;

    let engine = UnsubscribeEngine::new(LocalStorage::new(temp_dir.path()), client_for(&server));
    let report = engine.run("users.txt").await?;

    removed_mock.assert_async().await;
    missing_mock.assert_async().await;

    assert_eq!(report.malformed, vec!["bad"]);
    assert_eq!(report.result.successful.len(), 1);
    assert_eq!(report.result.successful[0].email(), "a@x.com");
    assert_eq!(report.result.failed.len(), 1);
    assert_eq!(report.result.failed[0].email(), "c@y.com");
    assert_eq!(report.result.failed[0].error(), Some("not found"));

    let errors = stringify_email_errors(&report.result.failed);
    assert_eq!(errors, "[ ERROR ] Failed to remove emails:\n\t-c@y.com (not found)");
    Ok(())
}

#[tokio::test]
async fn test_unexpected_response_is_unknown_failure() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_users(&temp_dir, "a@x.com\n").await?;

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/newsletter/lists/email/delete.json");
            then.status(200).json_body(json!({"message": "success"}));
        })
        .await;

    let engine = UnsubscribeEngine::new(LocalStorage::new(temp_dir.path()), client_for(&server));
    let report = engine.run("users.txt").await?;

    assert!(report.result.successful.is_empty());
    assert_eq!(report.result.failed[0].error(), Some("unknown"));
    Ok(())
}

#[tokio::test]
async fn test_only_malformed_input_sends_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_users(&temp_dir, "bad\nworse\n").await?;

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).json_body(json!({"removed": 1}));
        })
        .await;

    let engine = UnsubscribeEngine::new(LocalStorage::new(temp_dir.path()), client_for(&server));
    let report = engine.run("users.txt").await?;

    mock.assert_hits_async(0).await;
    assert_eq!(report.malformed, vec!["bad", "worse"]);
    assert_eq!(report.result.total(), 0);
    Ok(())
}

#[tokio::test]
async fn test_transport_fault_aborts_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_users(&temp_dir, "a@x.com\nb@x.com\n").await?;

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(500).body("Internal Server Error");
        })
        .await;

    let engine = UnsubscribeEngine::new(LocalStorage::new(temp_dir.path()), client_for(&server));
    let result = engine.run("users.txt").await;

    assert!(matches!(result, Err(UnsubscribeError::ApiError(_))));
    mock.assert_hits_async(1).await;
    Ok(())
}

#[tokio::test]
async fn test_missing_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start_async().await;

    let engine = UnsubscribeEngine::new(LocalStorage::new(temp_dir.path()), client_for(&server));
    let result = engine.run("does-not-exist.txt").await;

    match result {
        Err(e @ UnsubscribeError::IoError(_)) => assert_eq!(e.exit_code(), 3),
        other => panic!("expected IoError, got {:?}", other),
    }
    Ok(())
}
