//! Candidate extraction and deduplication

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Address grammar shared by extraction and the syntax check
pub(crate) const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).unwrap());

/// Candidate address with its byte offset in the scanned text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Candidate {
    pub address: String,
    pub position: usize,
}

/// Lazily scan `text` for address-like substrings, in order of appearance
pub fn extract(text: &str) -> impl Iterator<Item = &str> {
    EMAIL_REGEX.find_iter(text).map(|m| m.as_str())
}

/// All matches in `text`, duplicates included
#[must_use]
pub fn extract_candidates(text: &str) -> Vec<String> {
    extract(text).map(str::to_string).collect()
}

/// All matches in `text` along with where they start
#[must_use]
pub fn extract_with_positions(text: &str) -> Vec<Candidate> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| Candidate {
            address: m.as_str().to_string(),
            position: m.start(),
        })
        .collect()
}

/// Keep the first occurrence of each value, preserving first-seen order.
///
/// Comparison is exact: `A@x.io` and `a@x.io` are distinct.
pub fn dedup<I, S>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for candidate in candidates {
        let candidate = candidate.into();
        if seen.insert(candidate.clone()) {
            unique.push(candidate);
        }
    }

    unique
}

/// Extraction followed by deduplication
#[must_use]
pub fn extract_unique(text: &str) -> Vec<String> {
    dedup(extract(text))
}
