//! Core types for validation results

use crate::error::Error;
use crate::score::{classify, score};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of the four independent checks for one candidate
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Address matches the grammar in full
    pub syntax: bool,

    /// Domain judged plausible
    pub domain: bool,

    /// Domain is a known disposable provider
    pub disposable: bool,

    /// Local part is a role account (info@, admin@, ...)
    pub role_based: bool,
}

/// Status tier derived from the score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Risky,
    Invalid,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Valid, Self::Risky, Self::Invalid];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Risky => "risky",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "valid" => Ok(Self::Valid),
            "risky" => Ok(Self::Risky),
            "invalid" => Ok(Self::Invalid),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

/// Immutable result of validating one unique candidate
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationRecord {
    email: String,
    status: Status,
    score: u8,
    checks: CheckResult,
}

impl ValidationRecord {
    /// Build a record from check outcomes, deriving score and status
    #[must_use]
    pub fn from_checks(email: impl Into<String>, checks: CheckResult) -> Self {
        let score = score(&checks);
        Self {
            email: email.into(),
            status: classify(score),
            score,
            checks,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Confidence score in `0..=100`
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    #[must_use]
    pub const fn checks(&self) -> &CheckResult {
        &self.checks
    }
}

impl fmt::Display for ValidationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.email, self.status, self.score)
    }
}

/// Status part of a view: everything, or a single tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        Self::Only(status)
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

/// Transient filter and search parameters applied over a result store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub status: StatusFilter,
    pub search: String,
}

impl View {
    #[must_use]
    pub fn new(status: impl Into<StatusFilter>, search: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            search: search.into(),
        }
    }

    /// Both predicates must hold; search is a case-insensitive substring match
    #[must_use]
    pub fn matches(&self, record: &ValidationRecord) -> bool {
        self.status.matches(record.status()) && contains_ignore_case(record.email(), &self.search)
    }
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
