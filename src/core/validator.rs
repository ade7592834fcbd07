use crate::domain::model::ValidationSplit;

pub fn is_plausible_email(address: &str) -> bool {
    address.contains('@')
}

/// Splits addresses into those containing an "@" and those that don't.
/// No other syntax checks are made.
pub fn split_malformed_emails<I, T>(addresses: I) -> ValidationSplit
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let (valid, malformed) = addresses
        .into_iter()
        .map(Into::into)
        .partition(|address: &String| is_plausible_email(address));
    ValidationSplit { valid, malformed }
}
