use crate::utils::error::{Result, UnsubscribeError};
use url::Url;

/// Form fields that must only travel in the POST body.
const CREDENTIAL_PARAMS: [&str; 2] = ["api_user", "api_key"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Into<String>, reason: impl Into<String>) -> UnsubscribeError {
    UnsubscribeError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.into(),
        reason: reason.into(),
    }
}

/// The removal endpoint must be an absolute http(s) URL with a host, and
/// must not carry credentials of its own.
pub fn validate_endpoint(field: &str, endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field, endpoint, format!("Invalid URL format: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            endpoint,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field, endpoint, "URL has no host"));
    }
    if !url.username().is_empty() || url.password().is_some() {
        // Don't echo userinfo back into logs.
        return Err(invalid(field, "", "URL must not contain user credentials"));
    }
    if url
        .query_pairs()
        .any(|(key, _)| CREDENTIAL_PARAMS.contains(&key.as_ref()))
    {
        return Err(invalid(
            field,
            "",
            "api_user and api_key are sent as form fields, not in the query string",
        ));
    }
    Ok(())
}

pub fn validate_input_path(field: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field, path.replace('\0', "\\0"), "Path contains null bytes"));
    }
    Ok(())
}

/// Rejects blank values. The offending value is never recorded, since
/// this also guards the API key.
pub fn validate_form_value(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, "", "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

pub fn validate_timeout_secs(field: &str, secs: u64, min: u64, max: u64) -> Result<()> {
    if !(min..=max).contains(&secs) {
        return Err(invalid(
            field,
            secs.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}
