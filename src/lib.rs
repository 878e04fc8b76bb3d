// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Screening
//!
//! Extracts address-like substrings from free-form text, deduplicates them,
//! runs four independent checks on each, and derives a 0-100 score and a
//! status tier.
//!
//! # Pipeline
//!
//! - Extraction with a fixed, permissive address grammar
//! - First-occurrence deduplication (case-sensitive)
//! - Syntax, domain plausibility, disposable domain and role account checks
//! - Additive score deductions and `valid` / `risky` / `invalid` tiers
//! - In-memory result store with filter, search, CSV and plain-text export
//!
//! # Example
//!
//! ```rust
//! use email_screen::{ResultStore, Status, Validator, View};
//!
//! let validator = Validator::default();
//! let mut store = ResultStore::new();
//! store.replace(validator.run("Write to jane@gmail.com or info@acme.io"));
//!
//! let stats = store.stats();
//! assert_eq!(stats.total, 2);
//!
//! let csv = store.export_csv(&View::new(Status::Valid, "gmail"));
//! assert!(csv.contains("jane@gmail.com,valid,100"));
//! ```

mod checks;
mod config;
mod error;
mod export;
mod extract;
mod pipeline;
mod resolver;
mod score;
mod store;
mod types;

pub use checks::{CheckSuite, check_syntax, domain_of, local_part_of};
pub use config::{Config, DEFAULT_PLAUSIBILITY};
pub use error::{Error, Result, RunError};
pub use export::{CSV_HEADER, to_csv, to_json, to_valid_list};
pub use extract::{
    Candidate, dedup, extract, extract_candidates, extract_unique, extract_with_positions,
};
pub use pipeline::{CancelToken, FixedDelay, NoPacing, Pacer, Validator};
pub use resolver::{DomainResolver, SeededResolver, StaticResolver};
pub use score::{RISKY_THRESHOLD, VALID_THRESHOLD, classify, score};
pub use store::{ResultStore, Stats};
pub use types::*;
