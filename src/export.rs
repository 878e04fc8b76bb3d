//! Text renderings of validation records

use crate::error::Result;
use crate::types::{Status, ValidationRecord};
use std::fmt::Write;

/// Header line of the CSV export
pub const CSV_HEADER: &str = "Email,Status,Score,Syntax,Domain,Disposable,Role-based";

/// CSV with a header line and one newline-terminated row per record
#[must_use]
pub fn to_csv<'a>(records: impl IntoIterator<Item = &'a ValidationRecord>) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for record in records {
        let checks = record.checks();
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            record.email(),
            record.status(),
            record.score(),
            checks.syntax,
            checks.domain,
            checks.disposable,
            checks.role_based
        );
    }

    out
}

/// Newline-joined addresses of the valid records, without header
#[must_use]
pub fn to_valid_list<'a>(records: impl IntoIterator<Item = &'a ValidationRecord>) -> String {
    records
        .into_iter()
        .filter(|r| r.status() == Status::Valid)
        .map(ValidationRecord::email)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON array
pub fn to_json<'a>(records: impl IntoIterator<Item = &'a ValidationRecord>) -> Result<String> {
    let records: Vec<&ValidationRecord> = records.into_iter().collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
