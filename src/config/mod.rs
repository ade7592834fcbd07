pub mod cli;

use crate::core::client::LIST_DEL_URL;
use crate::core::{ConfigProvider, Credentials};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_endpoint, validate_form_value, validate_input_path, validate_timeout_secs, Validate,
};
use clap::Parser;
use std::fmt;
use std::time::Duration;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 600;

#[derive(Clone, Parser)]
#[command(name = "sendgrid-unsubscribe")]
#[command(about = "Remove every address in a text file from a SendGrid newsletter list")]
#[command(
    override_usage = "sendgrid-unsubscribe [OPTIONS] <USERS_LIST> <LIST_NAME> <API_USER> <API_KEY>"
)]
pub struct CliConfig {
    /// File with one email address per line
    pub users_list: String,

    /// Name of the list to remove addresses from
    pub list_name: String,

    /// API user the requests are made on behalf of
    pub api_user: String,

    /// API key for the API user
    pub api_key: String,

    #[arg(long, default_value = LIST_DEL_URL)]
    pub endpoint: String,

    /// Abort a request that takes longer than this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Report malformed addresses without removing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("users_list", &self.users_list)
            .field("list_name", &self.list_name)
            .field("credentials", &self.credentials())
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("dry_run", &self.dry_run)
            .field("json", &self.json)
            .finish()
    }
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn list_name(&self) -> &str {
        &self.list_name
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(self.api_user.clone(), self.api_key.clone())
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_input_path("users_list", &self.users_list)?;
        validate_form_value("list_name", &self.list_name)?;
        validate_form_value("api_user", &self.api_user)?;
        validate_form_value("api_key", &self.api_key)?;
        validate_endpoint("endpoint", &self.endpoint)?;
        if let Some(timeout) = self.timeout_secs {
            validate_timeout_secs("timeout_secs", timeout, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS)?;
        }
        Ok(())
    }
}
