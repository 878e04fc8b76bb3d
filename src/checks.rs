//! The four independent checks run against every candidate

use crate::config::Config;
use crate::extract::EMAIL_PATTERN;
use crate::resolver::DomainResolver;
use crate::types::CheckResult;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static ANCHORED_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{EMAIL_PATTERN}$")).unwrap());

/// Substring after the last `@`, if any
#[must_use]
pub fn domain_of(email: &str) -> Option<&str> {
    email.rsplit_once('@').map(|(_, domain)| domain)
}

/// Substring before the first `@`, if any
#[must_use]
pub fn local_part_of(email: &str) -> Option<&str> {
    email.split_once('@').map(|(local, _)| local)
}

/// Full-string match of the extraction grammar
#[must_use]
pub fn check_syntax(email: &str) -> bool {
    ANCHORED_EMAIL_REGEX.is_match(email)
}

/// Runs syntax, domain, disposable and role-based checks with a shared
/// configuration and domain resolver
pub struct CheckSuite {
    config: Config,
    resolver: Box<dyn DomainResolver>,
}

impl CheckSuite {
    /// Suite using the resolver described by `config`
    #[must_use]
    pub fn new(config: Config) -> Self {
        let resolver = config.build_resolver();
        Self { config, resolver }
    }

    #[must_use]
    pub fn with_resolver(config: Config, resolver: impl DomainResolver + 'static) -> Self {
        Self {
            config,
            resolver: Box::new(resolver),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluate all four checks; none reads another's outcome
    #[must_use]
    pub fn run(&self, email: &str) -> CheckResult {
        CheckResult {
            syntax: check_syntax(email),
            domain: self.check_domain(email),
            disposable: self.check_disposable(email),
            role_based: self.check_role_based(email),
        }
    }

    /// Known providers always pass; other domains go to the resolver.
    /// A missing or empty domain never passes.
    #[must_use]
    pub fn check_domain(&self, email: &str) -> bool {
        match domain_of(email) {
            Some(domain) if !domain.is_empty() => {
                self.config.is_known_provider(domain) || self.resolver.is_plausible(domain)
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn check_disposable(&self, email: &str) -> bool {
        domain_of(email).is_some_and(|domain| self.config.is_disposable_domain(domain))
    }

    #[must_use]
    pub fn check_role_based(&self, email: &str) -> bool {
        local_part_of(email).is_some_and(|local| self.config.is_role_prefix(local))
    }
}

impl Default for CheckSuite {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl fmt::Debug for CheckSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckSuite")
            .field("disposable_domains_count", &self.config.disposable_domains.len())
            .field("role_prefixes_count", &self.config.role_prefixes.len())
            .field("known_providers_count", &self.config.known_providers.len())
            .finish_non_exhaustive()
    }
}
