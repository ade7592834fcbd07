use crate::core::{BatchResult, RemovalService};
use crate::utils::error::Result;

/// Removes each address in turn and splits the outcomes into successful
/// and failed.
///
/// Calls are issued one at a time in input order. A transport fault stops
/// the batch and discards the outcomes gathered so far.
pub async fn delete_emails<R, T>(remover: &R, emails: &[T]) -> Result<BatchResult>
where
    R: RemovalService + ?Sized,
    T: AsRef<str> + Sync,
{
    let mut outcomes = Vec::with_capacity(emails.len());

    for (index, email) in emails.iter().enumerate() {
        let email = email.as_ref();
        let outcome = remover.delete_email(email).await?;

        match outcome.error() {
            None => tracing::debug!("[{}/{}] Removed {}", index + 1, emails.len(), email),
            Some(error) => tracing::warn!(
                "[{}/{}] Failed to remove {}: {}",
                index + 1,
                emails.len(),
                email,
                error
            ),
        }

        outcomes.push(outcome);
    }

    Ok(BatchResult::from_outcomes(outcomes))
}
