//! # pubsuffix
//!
//! Public Suffix List matching for Rust.
//!
//! `pubsuffix` splits a domain name into its *public suffix* (the part a
//! registry hands out, e.g. `com` or `kobe.jp`) and its *private suffix*
//! (the registrable domain, e.g. `example.com`), and uses that split to
//! decide whether a cookie `Domain` attribute is safe to accept.
//!
//! ## Features
//!
//! - **Longest-match resolution** with wildcard and exception rules
//! - **IDNA normalization**: Unicode labels are matched by their A-label
//! - **ICANN-only lookups** that ignore privately contributed rules
//! - **Bounded LRU cache** shared safely across threads
//! - **Cookie scoping checks** with two explicit policies
//!
//! ## Quick Start
//!
//! ```rust
//! use pubsuffix::{domain_can_set_cookie, domain_suffixes};
//!
//! let suffixes = domain_suffixes("www.example.co.uk")?;
//! assert_eq!(suffixes.public(), Some("co.uk"));
//! assert_eq!(suffixes.private(), Some("example.co.uk"));
//!
//! assert!(domain_can_set_cookie("www.example.co.uk", "example.co.uk")?);
//! assert!(!domain_can_set_cookie("www.example.co.uk", "co.uk")?);
//! # Ok::<(), pubsuffix::base::PslError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`labels`] - Domain label normalization
//! - [`rules`] - Suffix rules and list parsing
//! - [`resolver`] - Suffix resolution, configuration and caching
//! - [`cookies`] - Cookie domain scoping checks
//!
//! The free functions in this module use a process-wide resolver over the
//! embedded list. Build a [`SuffixResolver`](resolver::SuffixResolver) with
//! a [`ResolverConfig`](resolver::ResolverConfig) for anything else.

pub mod base;
pub mod cookies;
pub mod labels;
pub mod resolver;
pub mod rules;

use crate::base::PslError;
use crate::cookies::CookieScopeChecker;
use crate::resolver::{SuffixResolver, Suffixes};
use once_cell::sync::Lazy;
use std::sync::Arc;

static DEFAULT_CHECKER: Lazy<CookieScopeChecker> =
    Lazy::new(|| CookieScopeChecker::new(Arc::new(SuffixResolver::new())));

/// The resolver behind the free functions.
pub fn default_resolver() -> &'static SuffixResolver {
    DEFAULT_CHECKER.resolver()
}

/// Get the public and private suffixes of a domain, consulting the full list.
pub fn domain_suffixes(domain: &str) -> Result<Suffixes, PslError> {
    default_resolver().resolve_with(domain, false)
}

/// Get the public and private suffixes of a domain, optionally restricted to
/// the ICANN section of the list.
pub fn domain_suffixes_with(domain: &str, icann_only: bool) -> Result<Suffixes, PslError> {
    default_resolver().resolve_with(domain, icann_only)
}

/// Checks whether `http_domain`, the domain that was navigated to, may set a
/// cookie with `Domain=cookie_domain`.
///
/// Uses [`CookiePolicy::OriginBound`](cookies::CookiePolicy::OriginBound).
pub fn domain_can_set_cookie(http_domain: &str, cookie_domain: &str) -> Result<bool, PslError> {
    DEFAULT_CHECKER.can_set_cookie_for(http_domain, cookie_domain)
}

/// Checks whether `cookie_domain` lies within its own registrable domain.
///
/// Uses [`CookiePolicy::SelfScoped`](cookies::CookiePolicy::SelfScoped).
pub fn cookie_domain_is_registrable(cookie_domain: &str) -> Result<bool, PslError> {
    DEFAULT_CHECKER.can_set_cookie(cookie_domain)
}
