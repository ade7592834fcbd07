pub mod batch;
pub mod client;
pub mod engine;
pub mod report;
pub mod validator;

pub use crate::domain::model::{BatchResult, RemovalOutcome, RunReport, ValidationSplit};
pub use crate::domain::ports::{ConfigProvider, Credentials, RemovalService, Storage};
pub use crate::utils::error::Result;
