#[cfg(feature = "json")]
use crate::base::pslerror::PslError;
use crate::labels::DotPolicy;
use crate::resolver::cache::DEFAULT_CACHE_CAPACITY;
use crate::rules::RuleSource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration options for [`SuffixResolver`](crate::resolver::SuffixResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Where the rule list is loaded from.
    pub source: RuleSource,

    /// Consult only the ICANN section of the list by default.
    pub icann_only: bool,

    /// Maximum cached lookups (0 disables the cache).
    pub cache_capacity: usize,

    /// Trailing-dot handling for queried domains.
    pub dot_policy: DotPolicy,

    /// Treat `localhost` and names under `local` as reserved public suffixes
    /// with no registrable domain.
    pub reserve_local_domains: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            source: RuleSource::Embedded,
            icann_only: false,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            dot_policy: DotPolicy::Lenient,
            reserve_local_domains: false,
        }
    }
}

impl ResolverConfig {
    pub fn with_source(mut self, source: RuleSource) -> Self {
        self.source = source;
        self
    }

    /// Load rules from a list file on disk.
    pub fn with_rules_path(self, path: impl Into<PathBuf>) -> Self {
        self.with_source(RuleSource::Path(path.into()))
    }

    /// Use the given list text as the rule list.
    pub fn with_rules_text(self, text: impl Into<String>) -> Self {
        self.with_source(RuleSource::Inline(text.into()))
    }

    pub fn with_icann_only(mut self, icann_only: bool) -> Self {
        self.icann_only = icann_only;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Disable lookup caching.
    pub fn without_cache(self) -> Self {
        self.with_cache_capacity(0)
    }

    pub fn with_dot_policy(mut self, policy: DotPolicy) -> Self {
        self.dot_policy = policy;
        self
    }

    pub fn with_reserved_local_domains(mut self, reserve: bool) -> Self {
        self.reserve_local_domains = reserve;
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// ```rust
    /// use pubsuffix::resolver::ResolverConfig;
    ///
    /// let config = ResolverConfig::from_json(r#"{"icann_only": true, "dot_policy": "strict"}"#)?;
    /// assert!(config.icann_only);
    /// # Ok::<(), pubsuffix::base::PslError>(())
    /// ```
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, PslError> {
        serde_json::from_str(json).map_err(|e| PslError::InvalidConfig(e.to_string()))
    }
}
