#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use crate::core::{
    batch::delete_emails,
    client::{classify_response, SendGridClient, LIST_DEL_URL},
    engine::UnsubscribeEngine,
    report::stringify_email_errors,
    validator::split_malformed_emails,
};
pub use domain::model::{BatchResult, RemovalOutcome, RunReport, ValidationSplit};
pub use domain::ports::{ConfigProvider, Credentials, RemovalService, Storage};
pub use utils::error::{Result, UnsubscribeError};
