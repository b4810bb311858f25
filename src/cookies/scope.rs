//! Cookie `Domain` attribute validation.
//!
//! Prevents supercookie attacks by rejecting cookie domains that would scope
//! a cookie to a public suffix like `com` or `co.uk`.

use crate::base::pslerror::PslError;
use crate::labels::labels_from_domain_with;
use crate::resolver::SuffixResolver;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

/// Which cookie scoping check to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookiePolicy {
    /// Compare the cookie domain against the navigated-to domain: the
    /// cookie domain must be an ancestor-or-self of the request host and lie
    /// within the host's registrable domain.
    #[default]
    OriginBound,
    /// Check the cookie domain on its own: it must have a registrable domain
    /// and lie within it. The request host is not consulted.
    SelfScoped,
}

/// Decides whether a cookie `Domain` attribute is allowed.
///
/// ```rust
/// use pubsuffix::cookies::CookieScopeChecker;
///
/// let checker = CookieScopeChecker::default();
/// assert!(checker.can_set_cookie_for("foo.example.com", "example.com")?);
/// assert!(!checker.can_set_cookie_for("foo.example.com", "com")?);
/// # Ok::<(), pubsuffix::base::PslError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CookieScopeChecker {
    resolver: Arc<SuffixResolver>,
}

impl Default for CookieScopeChecker {
    fn default() -> Self {
        Self::new(Arc::new(SuffixResolver::new()))
    }
}

impl CookieScopeChecker {
    pub fn new(resolver: Arc<SuffixResolver>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &Arc<SuffixResolver> {
        &self.resolver
    }

    /// Run the check selected by `policy`. `http_domain` is ignored by
    /// [`CookiePolicy::SelfScoped`].
    pub fn check(
        &self,
        policy: CookiePolicy,
        http_domain: &str,
        cookie_domain: &str,
    ) -> Result<bool, PslError> {
        match policy {
            CookiePolicy::OriginBound => self.can_set_cookie_for(http_domain, cookie_domain),
            CookiePolicy::SelfScoped => self.can_set_cookie(cookie_domain),
        }
    }

    /// [`CookiePolicy::SelfScoped`]: the cookie domain must sit at or below
    /// its own registrable domain.
    pub fn can_set_cookie(&self, cookie_domain: &str) -> Result<bool, PslError> {
        let suffixes = self.resolver.resolve(cookie_domain)?;
        let Some(private) = suffixes.private else {
            return Ok(false);
        };
        self.is_subdomain(cookie_domain, &private)
    }

    /// [`CookiePolicy::OriginBound`]: may a response from `http_domain` set a
    /// cookie with `Domain=cookie_domain`?
    pub fn can_set_cookie_for(
        &self,
        http_domain: &str,
        cookie_domain: &str,
    ) -> Result<bool, PslError> {
        if http_domain.contains('*') {
            return Ok(false);
        }

        // Both names go through the same codec as `can_set_cookie`, so a name
        // the dot policy rejects is an error under either policy.
        let policy = self.resolver.config().dot_policy;
        let host = labels_from_domain_with(http_domain, policy)?;
        let scope = labels_from_domain_with(cookie_domain, policy)?;
        if host.has_empty_label() || scope.has_empty_label() {
            return Ok(false);
        }

        if !host.is_subdomain_of(&scope) {
            return Ok(false);
        }

        let suffixes = self.resolver.resolve(http_domain)?;
        let Some(private) = suffixes.private else {
            tracing::debug!(host = %http_domain, "cookie rejected: host has no registrable domain");
            return Ok(false);
        };

        let allowed = scope.is_subdomain_of(&labels_from_domain_with(&private, policy)?);
        if !allowed {
            tracing::debug!(
                host = %http_domain,
                cookie_domain = %cookie_domain,
                "cookie rejected: domain above registrable domain"
            );
        }
        Ok(allowed)
    }

    /// [`CookiePolicy::OriginBound`] check against the host of `url`.
    pub fn can_set_cookie_for_url(&self, url: &Url, cookie_domain: &str) -> Result<bool, PslError> {
        match url.host_str() {
            Some(host) => self.can_set_cookie_for(host, cookie_domain),
            None => Ok(false),
        }
    }

    /// Literal label-suffix test: `parent` is `child` or one of its ancestors.
    pub fn is_subdomain(&self, child: &str, parent: &str) -> Result<bool, PslError> {
        let policy = self.resolver.config().dot_policy;
        let child = labels_from_domain_with(child, policy)?;
        let parent = labels_from_domain_with(parent, policy)?;
        Ok(child.is_subdomain_of(&parent))
    }
}
