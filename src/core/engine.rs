use crate::core::batch::delete_emails;
use crate::core::validator::split_malformed_emails;
use crate::core::{BatchResult, RemovalService, RunReport, Storage, ValidationSplit};
use crate::utils::error::{Result, UnsubscribeError};

/// One address per line. Line endings (`\n` or `\r\n`) are stripped and
/// empty lines dropped; everything else is passed through untouched.
pub fn parse_address_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct UnsubscribeEngine<S: Storage, R: RemovalService> {
    storage: S,
    remover: R,
}

impl<S: Storage, R: RemovalService> UnsubscribeEngine<S, R> {
    pub fn new(storage: S, remover: R) -> Self {
        Self { storage, remover }
    }

    pub async fn load_addresses(&self, path: &str) -> Result<Vec<String>> {
        let raw = self.storage.read_file(path).await?;
        let contents = String::from_utf8(raw).map_err(|e| UnsubscribeError::InputError {
            message: format!("{} is not valid UTF-8: {}", path, e),
        })?;
        Ok(parse_address_list(&contents))
    }

    /// Loads the address list and separates out malformed entries.
    pub async fn prepare(&self, path: &str) -> Result<ValidationSplit> {
        tracing::debug!("Reading address list from {}", path);
        let addresses = self.load_addresses(path).await?;
        tracing::info!("Loaded {} addresses from {}", addresses.len(), path);

        let split = split_malformed_emails(addresses);
        if !split.malformed.is_empty() {
            tracing::warn!("Skipping {} malformed addresses", split.malformed.len());
        }
        Ok(split)
    }

    pub async fn remove(&self, emails: &[String]) -> Result<BatchResult> {
        tracing::info!("Removing {} addresses", emails.len());
        let result = delete_emails(&self.remover, emails).await?;
        tracing::info!(
            "Removal finished: {} removed, {} failed",
            result.successful.len(),
            result.failed.len()
        );
        Ok(result)
    }

    pub async fn run(&self, path: &str) -> Result<RunReport> {
        let split = self.prepare(path).await?;
        let result = self.remove(&split.valid).await?;
        Ok(RunReport {
            malformed: split.malformed,
            result,
        })
    }
}
