//! Runtime configuration: membership lists and pipeline knobs, with an
//! optional TOML file layered over the defaults.

use crate::error::{Error, Result};
use crate::pipeline::{FixedDelay, NoPacing, Pacer};
use crate::resolver::{DomainResolver, SeededResolver, StaticResolver};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const DEFAULT_DISPOSABLE_DOMAINS: &[&str] = &[
    "tempmail.com",
    "throwaway.email",
    "10minutemail.com",
    "guerrillamail.com",
    "mailinator.com",
];

const DEFAULT_ROLE_PREFIXES: &[&str] = &[
    "info", "admin", "support", "sales", "contact", "noreply", "no-reply", "help",
];

const DEFAULT_KNOWN_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
    "aol.com",
];

/// Probability that the seeded resolver accepts an unknown domain
pub const DEFAULT_PLAUSIBILITY: f64 = 0.9;

/// Runtime settings for a [`crate::Validator`]
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Lowercased domains of throwaway mailbox providers
    pub disposable_domains: HashSet<String>,
    /// Lowercased local parts treated as role accounts
    pub role_prefixes: HashSet<String>,
    /// Lowercased domains that are always plausible
    pub known_providers: HashSet<String>,
    /// Verdict for domains outside `known_providers` when no seed is set
    pub unknown_domain_plausible: bool,
    /// Switches unknown-domain verdicts to a seeded pseudo-random source
    pub domain_seed: Option<u64>,
    /// Acceptance probability used with `domain_seed`
    pub plausibility: f64,
    /// Pause after each finalized candidate
    pub pacing_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disposable_domains: normalize(DEFAULT_DISPOSABLE_DOMAINS.iter().copied()),
            role_prefixes: normalize(DEFAULT_ROLE_PREFIXES.iter().copied()),
            known_providers: normalize(DEFAULT_KNOWN_PROVIDERS.iter().copied()),
            unknown_domain_plausible: true,
            domain_seed: None,
            plausibility: DEFAULT_PLAUSIBILITY,
            pacing_delay: Duration::ZERO,
        }
    }
}

impl Config {
    /// Load a TOML file and layer it over the defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        debug!("Loading configuration from {}", path.display());
        Self::from_toml_str(&raw)
    }

    /// Parse TOML text and layer it over the defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(raw)?;
        let mut config = Self::default();
        config.apply(file)?;
        Ok(config)
    }

    fn apply(&mut self, file: ConfigFile) -> Result<()> {
        let ConfigFile {
            lists,
            domain,
            pacing,
        } = file;

        if let Some(domains) = lists.disposable_domains {
            self.disposable_domains = normalize(domains);
        }
        if let Some(prefixes) = lists.role_prefixes {
            self.role_prefixes = normalize(prefixes);
        }
        if let Some(providers) = lists.known_providers {
            self.known_providers = normalize(providers);
        }

        if let Some(plausible) = domain.unknown_plausible {
            self.unknown_domain_plausible = plausible;
        }
        if domain.seed.is_some() {
            self.domain_seed = domain.seed;
        }
        if let Some(p) = domain.plausibility {
            self.plausibility = p;
        }
        if let Some(ms) = pacing.delay_ms {
            self.pacing_delay = Duration::from_millis(ms);
        }

        self.validate()
    }

    /// Reject values the pipeline cannot use
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.plausibility) {
            return Err(Error::InvalidConfig {
                field: "domain.plausibility".into(),
                details: format!("{} is outside 0.0..=1.0", self.plausibility),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn is_disposable_domain(&self, domain: &str) -> bool {
        self.disposable_domains.contains(&domain.to_lowercase())
    }

    #[must_use]
    pub fn is_role_prefix(&self, local_part: &str) -> bool {
        self.role_prefixes.contains(&local_part.to_lowercase())
    }

    #[must_use]
    pub fn is_known_provider(&self, domain: &str) -> bool {
        self.known_providers.contains(&domain.to_lowercase())
    }

    /// Resolver for domains outside the known-provider list
    #[must_use]
    pub fn build_resolver(&self) -> Box<dyn DomainResolver> {
        match self.domain_seed {
            Some(seed) => Box::new(SeededResolver::new(seed, self.plausibility)),
            None => Box::new(StaticResolver::new(self.unknown_domain_plausible)),
        }
    }

    #[must_use]
    pub fn build_pacer(&self) -> Box<dyn Pacer> {
        if self.pacing_delay.is_zero() {
            Box::new(NoPacing)
        } else {
            Box::new(FixedDelay(self.pacing_delay))
        }
    }
}

fn normalize<I, S>(entries: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Mirror of the TOML file layout; every field is optional
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    lists: ListsConfig,
    #[serde(default)]
    domain: DomainConfig,
    #[serde(default)]
    pacing: PacingConfig,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct ListsConfig {
    disposable_domains: Option<Vec<String>>,
    role_prefixes: Option<Vec<String>>,
    known_providers: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct DomainConfig {
    unknown_plausible: Option<bool>,
    seed: Option<u64>,
    plausibility: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PacingConfig {
    delay_ms: Option<u64>,
}
