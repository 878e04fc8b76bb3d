//! In-memory result set with filtering, search, export and statistics

use crate::error::Result;
use crate::export;
use crate::types::{Status, StatusFilter, ValidationRecord, View, contains_ignore_case};
use serde::Serialize;

/// Records of the latest validation run, in first-seen order.
///
/// Each run replaces the whole set; views never modify it.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    records: Vec<ValidationRecord>,
}

impl ResultStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Discard the previous run and keep `records` instead
    pub fn replace(&mut self, records: Vec<ValidationRecord>) {
        self.records = records;
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn records(&self) -> &[ValidationRecord] {
        &self.records
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn filter(&self, status: StatusFilter) -> Vec<&ValidationRecord> {
        self.records
            .iter()
            .filter(|r| status.matches(r.status()))
            .collect()
    }

    /// Case-insensitive substring match on the address
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&ValidationRecord> {
        self.records
            .iter()
            .filter(|r| contains_ignore_case(r.email(), term))
            .collect()
    }

    /// Records passing both the status filter and the search term
    #[must_use]
    pub fn view(&self, view: &View) -> Vec<&ValidationRecord> {
        self.records.iter().filter(|r| view.matches(r)).collect()
    }

    #[must_use]
    pub fn export_csv(&self, view: &View) -> String {
        export::to_csv(self.view(view))
    }

    /// Valid addresses within the view, one per line
    #[must_use]
    pub fn export_valid_only(&self, view: &View) -> String {
        export::to_valid_list(self.view(view))
    }

    pub fn export_json(&self, view: &View) -> Result<String> {
        export::to_json(self.view(view))
    }

    /// Counts over the whole set, regardless of any view
    #[must_use]
    pub fn stats(&self) -> Stats {
        let mut stats = Stats {
            total: self.records.len(),
            ..Stats::default()
        };
        for record in &self.records {
            match record.status() {
                Status::Valid => stats.valid += 1,
                Status::Risky => stats.risky += 1,
                Status::Invalid => stats.invalid += 1,
            }
        }
        stats
    }
}

/// Per-status counts of a result set
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub valid: usize,
    pub risky: usize,
    pub invalid: usize,
}

impl Stats {
    #[must_use]
    pub const fn count(&self, status: Status) -> usize {
        match status {
            Status::Valid => self.valid,
            Status::Risky => self.risky,
            Status::Invalid => self.invalid,
        }
    }

    /// Share of `status` in percent; `None` for an empty set
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self, status: Status) -> Option<f64> {
        (self.total > 0).then(|| self.count(status) as f64 * 100.0 / self.total as f64)
    }
}
