use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of trying to remove one address from a list.
///
/// `error` is present exactly when the removal did not succeed. The
/// constructors and the checked `Deserialize` impl keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedOutcome")]
pub struct RemovalOutcome {
    email: String,
    successful: bool,
    error: Option<String>,
}

#[derive(Deserialize)]
struct UncheckedOutcome {
    email: String,
    successful: bool,
    #[serde(default)]
    error: Option<String>,
}

impl TryFrom<UncheckedOutcome> for RemovalOutcome {
    type Error = String;

    fn try_from(raw: UncheckedOutcome) -> Result<Self, Self::Error> {
        match (raw.successful, raw.error) {
            (true, None) => Ok(Self::removed(raw.email)),
            (false, Some(error)) => Ok(Self::failed(raw.email, error)),
            (true, Some(_)) => Err(format!(
                "removal of {} succeeded but carries an error",
                raw.email
            )),
            (false, None) => Err(format!("failed removal of {} has no error", raw.email)),
        }
    }
}

impl RemovalOutcome {
    pub fn removed(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            successful: true,
            error: None,
        }
    }

    pub fn failed(email: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            successful: false,
            error: Some(error.into()),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_successful(&self) -> bool {
        self.successful
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub successful: Vec<RemovalOutcome>,
    pub failed: Vec<RemovalOutcome>,
}

impl BatchResult {
    /// Stable partition of `outcomes` on their success flag.
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = RemovalOutcome>) -> Self {
        let (successful, failed) = outcomes
            .into_iter()
            .partition(RemovalOutcome::is_successful);
        Self { successful, failed }
    }

    pub fn total(&self) -> usize {
        self.successful.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

impl fmt::Display for BatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} successfully removed. Failed to remove {}.",
            self.successful.len(),
            self.failed.len()
        )
    }
}

/// Input addresses split into plausible and malformed, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSplit {
    pub valid: Vec<String>,
    pub malformed: Vec<String>,
}

/// Everything one run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub malformed: Vec<String>,
    pub result: BatchResult,
}
