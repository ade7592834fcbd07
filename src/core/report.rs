use crate::core::{BatchResult, RemovalOutcome};
use crate::utils::error::Result;
use serde::Serialize;

const BULLET: &str = "\n\t-";

fn bulleted<I, S>(entries: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| format!("{}{}", BULLET, entry.as_ref()))
        .collect()
}

/// Renders failed removals as a header plus one bullet per address.
pub fn stringify_email_errors(failed: &[RemovalOutcome]) -> String {
    let lines = failed.iter().map(|outcome| {
        format!(
            "{} ({})",
            outcome.email(),
            outcome.error().unwrap_or_default()
        )
    });
    format!("[ ERROR ] Failed to remove emails:{}", bulleted(lines))
}

pub fn format_malformed_warning(malformed: &[String]) -> String {
    format!("[ WARN ] Ignoring malformed emails:{}", bulleted(malformed))
}

pub fn format_removal_notice(count: usize) -> String {
    format!("[ INFO ] Removing {} email addresses.", count)
}

pub fn format_summary(result: &BatchResult) -> String {
    format!("[ INFO ] {}", result)
}

/// Pretty JSON for `--json` output.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
