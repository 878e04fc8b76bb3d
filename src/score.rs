//! Scoring and classification of check outcomes

use crate::types::{CheckResult, Status};

const MAX_SCORE: i32 = 100;

const SYNTAX_PENALTY: i32 = 100;
const DOMAIN_PENALTY: i32 = 40;
const DISPOSABLE_PENALTY: i32 = 30;
const ROLE_BASED_PENALTY: i32 = 10;

/// Lowest score still classified as valid
pub const VALID_THRESHOLD: u8 = 90;

/// Lowest score still classified as risky
pub const RISKY_THRESHOLD: u8 = 60;

/// Derive a score in `0..=100` from check outcomes.
///
/// Deductions are additive; a syntax failure alone floors the score at 0.
#[must_use]
pub fn score(checks: &CheckResult) -> u8 {
    let mut total = MAX_SCORE;

    if !checks.syntax {
        total -= SYNTAX_PENALTY;
    }
    if !checks.domain {
        total -= DOMAIN_PENALTY;
    }
    if checks.disposable {
        total -= DISPOSABLE_PENALTY;
    }
    if checks.role_based {
        total -= ROLE_BASED_PENALTY;
    }

    // Clamped to 0..=100, so the conversion cannot fail
    u8::try_from(total.clamp(0, MAX_SCORE)).unwrap_or(0)
}

/// Map a score to its status tier
#[must_use]
pub const fn classify(score: u8) -> Status {
    if score >= VALID_THRESHOLD {
        Status::Valid
    } else if score >= RISKY_THRESHOLD {
        Status::Risky
    } else {
        Status::Invalid
    }
}
