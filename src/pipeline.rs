//! Validation runs: extraction, deduplication, checks, scoring and
//! classification over one text blob

use crate::checks::CheckSuite;
use crate::config::Config;
use crate::error::RunError;
use crate::extract::extract_unique;
use crate::types::{Status, ValidationRecord};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pause applied after each candidate is finalized. Has no effect on results.
pub trait Pacer: Send + Sync {
    fn pause(&self);
}

/// Never pauses
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&self) {}
}

/// Sleeps the current thread for a fixed duration
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Pacer for FixedDelay {
    fn pause(&self) {
        std::thread::sleep(self.0);
    }
}

/// Cloneable flag checked between candidates
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Drives candidates through the check suite one at a time, in first-seen
/// order
pub struct Validator {
    suite: CheckSuite,
    pacer: Box<dyn Pacer>,
}

impl Validator {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let pacer = config.build_pacer();
        Self {
            suite: CheckSuite::new(config),
            pacer,
        }
    }

    #[must_use]
    pub fn with_suite(suite: CheckSuite) -> Self {
        Self {
            suite,
            pacer: Box::new(NoPacing),
        }
    }

    #[must_use]
    pub fn pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    #[must_use]
    pub const fn suite(&self) -> &CheckSuite {
        &self.suite
    }

    /// Check, score and classify a single address
    #[must_use]
    pub fn validate(&self, email: &str) -> ValidationRecord {
        let checks = self.suite.run(email);
        let record = ValidationRecord::from_checks(email, checks);
        debug!(
            "Validated {}: score={} status={} checks={:?}",
            record.email(),
            record.score(),
            record.status(),
            checks
        );
        record
    }

    /// Validate every unique candidate found in `text`
    #[must_use]
    pub fn run(&self, text: &str) -> Vec<ValidationRecord> {
        // A fresh token is never cancelled
        self.run_with_cancel(text, &CancelToken::new())
            .unwrap_or_default()
    }

    /// Like [`Self::run`], but stops before the next candidate once `cancel`
    /// is set. A cancelled run yields no records at all.
    pub fn run_with_cancel(
        &self,
        text: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<ValidationRecord>, RunError> {
        let candidates = extract_unique(text);
        let total = candidates.len();
        let mut records = Vec::with_capacity(total);

        for candidate in &candidates {
            if cancel.is_cancelled() {
                let completed = records.len();
                warn!("Validation cancelled after {completed} of {total} candidates");
                return Err(RunError::Cancelled { completed, total });
            }

            records.push(self.validate(candidate));
            self.pacer.pause();
        }

        let count = |status: Status| records.iter().filter(|r| r.status() == status).count();
        info!(
            "Validated {total} unique candidates: {} valid, {} risky, {} invalid",
            count(Status::Valid),
            count(Status::Risky),
            count(Status::Invalid)
        );

        Ok(records)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
