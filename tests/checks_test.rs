use email_screen::*;

fn strict_suite() -> CheckSuite {
    CheckSuite::with_resolver(Config::default(), StaticResolver::new(false))
}

// --- Address parts ---

#[test]
fn test_domain_and_local_part() {
    assert_eq!(domain_of("a@b@example.com"), Some("example.com"));
    assert_eq!(local_part_of("a@b@example.com"), Some("a"));
    assert_eq!(domain_of("nobody"), None);
    assert_eq!(local_part_of("nobody"), None);
}

// --- Syntax ---

#[test]
fn test_syntax_accepts_grammar() {
    assert!(check_syntax("john.doe@gmail.com"));
    assert!(check_syntax("a+b%c_d-e@mail-1.example.co"));
}

#[test]
fn test_syntax_requires_full_match() {
    assert!(!check_syntax("see john@gmail.com"));
    assert!(!check_syntax("john@gmail.com "));
    assert!(!check_syntax("john@gmail.com\n"));
    assert!(!check_syntax("john@gmail.c"));
    assert!(!check_syntax("@gmail.com"));
    assert!(!check_syntax("john@gmail.c0m"));
    assert!(!check_syntax(""));
}

// --- Disposable ---

#[test]
fn test_disposable_default_list() {
    let suite = CheckSuite::default();
    for domain in [
        "tempmail.com",
        "throwaway.email",
        "10minutemail.com",
        "guerrillamail.com",
        "mailinator.com",
    ] {
        assert!(suite.check_disposable(&format!("x@{domain}")), "{domain}");
    }
}

#[test]
fn test_disposable_case_insensitive_exact() {
    let suite = CheckSuite::default();
    assert!(suite.check_disposable("x@MailInator.COM"));
    assert!(!suite.check_disposable("x@sub.mailinator.com"));
    assert!(!suite.check_disposable("x@mailinator.com.evil.io"));
    assert!(!suite.check_disposable("no-at-sign"));
}

// --- Role-based ---

#[test]
fn test_role_based_default_list() {
    let suite = CheckSuite::default();
    for prefix in [
        "info", "admin", "support", "sales", "contact", "noreply", "no-reply", "help",
    ] {
        assert!(suite.check_role_based(&format!("{prefix}@acme.io")), "{prefix}");
    }
}

#[test]
fn test_role_based_case_insensitive_exact() {
    let suite = CheckSuite::default();
    assert!(suite.check_role_based("Support@acme.io"));
    assert!(!suite.check_role_based("supporter@acme.io"));
    assert!(!suite.check_role_based("info.team@acme.io"));
    assert!(!suite.check_role_based("info"));
}

// --- Domain plausibility ---

#[test]
fn test_domain_known_providers_always_plausible() {
    let suite = strict_suite();
    for domain in [
        "gmail.com",
        "yahoo.com",
        "outlook.com",
        "hotmail.com",
        "icloud.com",
        "aol.com",
        "GMAIL.com",
    ] {
        assert!(suite.check_domain(&format!("me@{domain}")), "{domain}");
    }
}

#[test]
fn test_domain_unknown_uses_resolver() {
    assert!(!strict_suite().check_domain("me@unknown-corp.io"));
    assert!(CheckSuite::default().check_domain("me@unknown-corp.io"));
}

#[test]
fn test_domain_missing_is_never_plausible() {
    let suite = CheckSuite::default();
    assert!(!suite.check_domain("no-at-sign"));
    assert!(!suite.check_domain("trailing@"));
}

#[test]
fn test_domain_custom_resolver_sees_domain() {
    let suite = CheckSuite::with_resolver(Config::default(), |domain: &str| {
        domain.ends_with(".org")
    });
    assert!(suite.check_domain("a@example.org"));
    assert!(!suite.check_domain("a@example.net"));
}

#[test]
fn test_seeded_resolver_is_reproducible() {
    let domains: Vec<String> = (0..64).map(|i| format!("host{i}.example")).collect();

    let first = SeededResolver::new(7, DEFAULT_PLAUSIBILITY);
    let second = SeededResolver::new(7, DEFAULT_PLAUSIBILITY);
    let a: Vec<bool> = domains.iter().map(|d| first.is_plausible(d)).collect();
    let b: Vec<bool> = domains.iter().map(|d| second.is_plausible(d)).collect();

    assert_eq!(a, b);
}

#[test]
fn test_seeded_resolver_extremes() {
    let never = SeededResolver::new(1, 0.0);
    let always = SeededResolver::new(1, 1.0);
    for _ in 0..32 {
        assert!(!never.is_plausible("x.example"));
        assert!(always.is_plausible("x.example"));
    }
}

// --- Suite ---

#[test]
fn test_run_reports_all_four_checks() {
    let checks = strict_suite().run("admin@mailinator.com");
    assert_eq!(
        checks,
        CheckResult {
            syntax: true,
            domain: false,
            disposable: true,
            role_based: true,
        }
    );
}

#[test]
fn test_checks_are_independent() {
    // Syntax fails but the membership checks still run
    let checks = CheckSuite::default().run("info@gmail.com.");
    assert!(!checks.syntax);
    assert!(checks.role_based);
    assert!(!checks.disposable);
}
