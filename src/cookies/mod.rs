//! Cookie domain scoping.
//!
//! Two checks are available, selected with [`CookiePolicy`]:
//!
//! | Policy | Inputs | Accepts when |
//! |--------|--------|--------------|
//! | [`OriginBound`](CookiePolicy::OriginBound) | request host, cookie domain | cookie domain is an ancestor-or-self of the host and within the host's registrable domain |
//! | [`SelfScoped`](CookiePolicy::SelfScoped) | cookie domain | cookie domain has a registrable domain and lies within it |
//!
//! # Example
//!
//! ```rust
//! use pubsuffix::cookies::{CookiePolicy, CookieScopeChecker};
//!
//! let checker = CookieScopeChecker::default();
//! assert!(checker.check(CookiePolicy::OriginBound, "foo.example.com", "example.com")?);
//! assert!(!checker.check(CookiePolicy::OriginBound, "foo.example.com", "bar.example.com")?);
//! assert!(!checker.check(CookiePolicy::SelfScoped, "", "co.uk")?);
//! # Ok::<(), pubsuffix::base::PslError>(())
//! ```

mod scope;

pub use scope::{CookiePolicy, CookieScopeChecker};
