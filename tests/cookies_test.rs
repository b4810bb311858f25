use pubsuffix::cookies::{CookiePolicy, CookieScopeChecker};
use pubsuffix::domain_can_set_cookie;
use pubsuffix::labels::DotPolicy;
use pubsuffix::resolver::{ResolverConfig, SuffixResolver};
use std::sync::Arc;
use url::Url;

#[test]
fn test_cookie_on_parent_domain() {
    assert!(domain_can_set_cookie("foo.example.com", "example.com").unwrap());
    assert!(domain_can_set_cookie("example.com", "example.com").unwrap());
    assert!(domain_can_set_cookie("a.b.example.co.uk", "b.example.co.uk").unwrap());
}

#[test]
fn test_cookie_on_sibling_rejected() {
    assert!(!domain_can_set_cookie("foo.example.com", "bar.example.com").unwrap());
    assert!(!domain_can_set_cookie("example.com", "other.com").unwrap());
}

#[test]
fn test_supercookie_prevention() {
    // These should all be REJECTED to prevent supercookie attacks
    assert!(!domain_can_set_cookie("foo.example.com", "com").unwrap());
    assert!(!domain_can_set_cookie("example.com", ".com").unwrap());
    assert!(!domain_can_set_cookie("example.co.uk", "co.uk").unwrap());
    assert!(!domain_can_set_cookie("user.github.io", "github.io").unwrap());
    assert!(!domain_can_set_cookie("foo.bar.kawasaki.jp", "bar.kawasaki.jp").unwrap());
}

#[test]
fn test_host_without_registrable_domain() {
    assert!(!domain_can_set_cookie("co.uk", "co.uk").unwrap());
    assert!(!domain_can_set_cookie("github.io", "github.io").unwrap());
}

#[test]
fn test_exception_rule_host() {
    // !city.kawasaki.jp makes city.kawasaki.jp registrable.
    assert!(domain_can_set_cookie("www.city.kawasaki.jp", "city.kawasaki.jp").unwrap());
}

#[test]
fn test_leading_dot_cookie_domain() {
    assert!(domain_can_set_cookie("sub.example.com", ".example.com").unwrap());
}

#[test]
fn test_wildcard_host_rejected() {
    assert!(!domain_can_set_cookie("*.example.com", "example.com").unwrap());
}

#[test]
fn test_empty_label_rejected() {
    assert!(!domain_can_set_cookie("foo..example.com", "example.com").unwrap());
    assert!(!domain_can_set_cookie("foo.example.com", "").unwrap());
}

#[test]
fn test_policies_differ() {
    let checker = CookieScopeChecker::default();

    // The self-scoped policy never looks at the request host.
    assert!(checker
        .check(CookiePolicy::SelfScoped, "unrelated.org", "example.com")
        .unwrap());
    assert!(!checker
        .check(CookiePolicy::OriginBound, "unrelated.org", "example.com")
        .unwrap());
}

#[test]
fn test_default_policy_is_origin_bound() {
    assert_eq!(CookiePolicy::default(), CookiePolicy::OriginBound);
}

#[test]
fn test_url_based_check() {
    let checker = CookieScopeChecker::default();
    let url = Url::parse("https://accounts.example.co.uk/login").unwrap();
    assert!(checker.can_set_cookie_for_url(&url, "example.co.uk").unwrap());
    assert!(!checker.can_set_cookie_for_url(&url, "co.uk").unwrap());
}

#[test]
fn test_reserved_local_domains() {
    let resolver = SuffixResolver::with_config(
        ResolverConfig::default().with_reserved_local_domains(true),
    )
    .unwrap();
    let checker = CookieScopeChecker::new(Arc::new(resolver));

    assert!(!checker.can_set_cookie_for("printer.local", "printer.local").unwrap());
    assert!(!checker.can_set_cookie("localhost").unwrap());

    let plain = CookieScopeChecker::default();
    assert!(plain.can_set_cookie_for("printer.local", "printer.local").unwrap());
}

#[test]
fn test_strict_trailing_dot_host() {
    let resolver = SuffixResolver::with_config(
        ResolverConfig::default().with_dot_policy(DotPolicy::Strict),
    )
    .unwrap();
    let checker = CookieScopeChecker::new(Arc::new(resolver));

    let origin = checker
        .check(CookiePolicy::OriginBound, "foo.example.com.", "example.com")
        .unwrap_err();
    let scoped = checker
        .check(CookiePolicy::SelfScoped, "", "foo.example.com.")
        .unwrap_err();
    assert!(origin.is_malformed_domain());
    assert!(scoped.is_malformed_domain());

    assert!(checker
        .check(CookiePolicy::OriginBound, "foo.example.com", "example.com")
        .unwrap());
}

#[test]
fn test_malformed_domain_surfaces() {
    let err = domain_can_set_cookie("a\u{80}b.example.com", "example.com").unwrap_err();
    assert!(err.is_malformed_domain());
}
