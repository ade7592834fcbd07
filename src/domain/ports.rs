use crate::domain::model::RemovalOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Account identifier and API key for the list service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_id: String,
    pub api_key: String,
}

impl Credentials {
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn list_name(&self) -> &str;
    fn credentials(&self) -> Credentials;
    fn timeout(&self) -> Option<Duration>;
}

/// Removes a single address from the configured list.
///
/// `Err` is reserved for transport faults; a rejection by the service is
/// an `Ok` outcome with `successful == false`.
#[async_trait]
pub trait RemovalService: Send + Sync {
    async fn delete_email(&self, email: &str) -> Result<RemovalOutcome>;
}
