use crate::core::{ConfigProvider, Credentials, RemovalOutcome, RemovalService};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const LIST_DEL_URL: &str = "https://api.sendgrid.com/api/newsletter/lists/email/delete.json";

/// Error text for responses that carry neither a removal count nor errors.
pub const UNKNOWN_ERROR: &str = "unknown";

/// Client for the SendGrid newsletter "delete list email" call.
pub struct SendGridClient {
    client: Client,
    endpoint: String,
    list_name: String,
    credentials: Credentials,
}

impl SendGridClient {
    pub fn new(
        endpoint: impl Into<String>,
        list_name: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            list_name: list_name.into(),
            credentials,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = build_http_client(config.timeout())?;
        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
            list_name: config.list_name().to_string(),
            credentials: config.credentials(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn list_name(&self) -> &str {
        &self.list_name
    }
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

#[async_trait]
impl RemovalService for SendGridClient {
    async fn delete_email(&self, email: &str) -> Result<RemovalOutcome> {
        let params = [
            ("list", self.list_name.as_str()),
            ("api_user", self.credentials.account_id.as_str()),
            ("api_key", self.credentials.api_key.as_str()),
            ("email", email),
        ];

        tracing::debug!("Requesting removal of {} from list {}", email, self.list_name);
        let response = self.client.post(&self.endpoint).form(&params).send().await?;

        let status = response.status();
        tracing::debug!("Removal response status for {}: {}", email, status);
        if !status.is_success() {
            tracing::warn!("List service answered {} for {}", status, email);
        }

        let body: Value = response.json().await?;
        Ok(classify_response(email, &body))
    }
}

/// Maps a decoded response body onto a removal outcome.
///
/// `{"removed": 1}` wins over everything else, then a non-empty `errors`
/// array; any other shape is reported as [`UNKNOWN_ERROR`].
pub fn classify_response(email: &str, body: &Value) -> RemovalOutcome {
    // Integer or float, as long as it is exactly one.
    if body.get("removed").and_then(Value::as_f64) == Some(1.0) {
        return RemovalOutcome::removed(email);
    }

    match body.get("errors").and_then(Value::as_array) {
        Some(errors) if !errors.is_empty() => {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| match e {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            RemovalOutcome::failed(email, messages.join("\n"))
        }
        _ => RemovalOutcome::failed(email, UNKNOWN_ERROR),
    }
}
