//! Public/private suffix resolution.

use crate::base::pslerror::PslError;
use crate::labels::{domain_from_labels, labels_from_domain_with, DomainLabels};
use crate::resolver::cache::SuffixCache;
use crate::resolver::config::ResolverConfig;
use crate::resolver::suffixes::Suffixes;
use crate::rules::{Rule, RuleList};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

static IMPLICIT_RULE: Lazy<Rule> = Lazy::new(Rule::wildcard);

/// Resolves domains to their public and private suffixes.
///
/// Holds an immutable rule list and a bounded lookup cache. Safe to share
/// across threads; wrap in an `Arc` to hand out copies.
///
/// ```rust
/// use pubsuffix::resolver::SuffixResolver;
///
/// let resolver = SuffixResolver::new();
/// let suffixes = resolver.resolve("www.example.co.uk")?;
/// assert_eq!(suffixes.public(), Some("co.uk"));
/// assert_eq!(suffixes.private(), Some("example.co.uk"));
/// # Ok::<(), pubsuffix::base::PslError>(())
/// ```
pub struct SuffixResolver {
    rules: Arc<RuleList>,
    cache: SuffixCache,
    config: ResolverConfig,
}

impl Default for SuffixResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixResolver {
    /// Create a resolver over the embedded list with default configuration.
    pub fn new() -> Self {
        Self::with_rules(RuleList::embedded(), ResolverConfig::default())
    }

    /// Create a resolver, loading the rule list named by `config.source`.
    ///
    /// Fails if the rule list cannot be loaded.
    pub fn with_config(config: ResolverConfig) -> Result<Self, PslError> {
        let rules = config.source.load()?;
        Ok(Self::with_rules(rules, config))
    }

    /// Create a resolver over an already-loaded list. `config.source` is
    /// ignored.
    pub fn with_rules(rules: Arc<RuleList>, config: ResolverConfig) -> Self {
        Self {
            rules,
            cache: SuffixCache::new(config.cache_capacity),
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn rules(&self) -> &Arc<RuleList> {
        &self.rules
    }

    /// Resolve using the configured `icann_only` default.
    pub fn resolve(&self, domain: &str) -> Result<Suffixes, PslError> {
        self.resolve_with(domain, self.config.icann_only)
    }

    /// Resolve a domain's public and private suffixes.
    ///
    /// A domain with an empty label (e.g. `example..com`) has no determinable
    /// suffix and yields [`Suffixes::none`]. Names that cannot be normalized
    /// are an error.
    pub fn resolve_with(&self, domain: &str, icann_only: bool) -> Result<Suffixes, PslError> {
        if let Some(hit) = self.cache.get(domain, icann_only) {
            tracing::trace!(domain = %domain, "suffix cache hit");
            return Ok(hit);
        }

        tracing::trace!(domain = %domain, icann_only, "suffix cache miss");
        let suffixes = self.compute(domain, icann_only)?;
        self.cache.insert(domain, icann_only, suffixes.clone());
        Ok(suffixes)
    }

    fn compute(&self, domain: &str, icann_only: bool) -> Result<Suffixes, PslError> {
        let labels = labels_from_domain_with(domain, self.config.dot_policy)?;
        if labels.has_empty_label() {
            return Ok(Suffixes::none());
        }

        if self.config.reserve_local_domains {
            if let Some(reserved) = reserved_local_suffix(&labels) {
                return Ok(reserved);
            }
        }

        let rule = self.best_match(&labels, icann_only);
        tracing::trace!(domain = %domain, rule = %rule, "selected suffix rule");

        Ok(split_suffixes(&labels, rule.suffix_len()))
    }

    /// Select the rule governing `labels`.
    ///
    /// The longest matching rule wins. Among rules of equal length an
    /// exception wins, and finding one ends the scan. With no match the
    /// implicit `*` rule applies.
    pub fn best_match(&self, labels: &DomainLabels, icann_only: bool) -> Cow<'_, Rule> {
        let mut best: Option<&Rule> = None;

        for rule in self.rules.matching(labels, icann_only) {
            match best {
                None => best = Some(rule),
                Some(current) if rule.len() > current.len() => best = Some(rule),
                Some(current) if rule.is_exception() && rule.len() == current.len() => {
                    best = Some(rule);
                    break;
                }
                Some(_) => {}
            }
        }

        match best {
            Some(rule) => Cow::Borrowed(rule),
            None => Cow::Borrowed(&*IMPLICIT_RULE),
        }
    }

    /// True if `domain` is itself a public suffix, e.g. `com` or `co.uk`.
    pub fn is_public_suffix(&self, domain: &str) -> Result<bool, PslError> {
        let suffixes = self.resolve(domain)?;
        Ok(suffixes.public.is_some() && suffixes.private.is_none())
    }

    /// The registrable domain (public suffix plus one label), if any.
    pub fn registrable_domain(&self, domain: &str) -> Result<Option<String>, PslError> {
        Ok(self.resolve(domain)?.private)
    }

    /// Number of cached lookups.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl fmt::Debug for SuffixResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixResolver")
            .field("rules", &self.rules.len())
            .field("icann_rules", &self.rules.icann_len())
            .field("cached", &self.cache.len())
            .field("config", &self.config)
            .finish()
    }
}

/// Build the result from the number of labels in the public suffix.
fn split_suffixes(labels: &DomainLabels, public_len: usize) -> Suffixes {
    if public_len == 0 {
        return Suffixes::new(None, Some(labels.to_domain()));
    }

    let public = domain_from_labels(labels.trailing(public_len));
    let private = if public_len >= labels.len() {
        None
    } else {
        Some(domain_from_labels(labels.trailing(public_len + 1)))
    };

    Suffixes::new(Some(public), private)
}

/// `localhost` and anything under `local` are treated as reserved suffixes.
fn reserved_local_suffix(labels: &DomainLabels) -> Option<Suffixes> {
    let last = labels.last()?;
    let reserved = last == b"local" || (labels.len() == 1 && last == b"localhost");
    if !reserved {
        return None;
    }
    let name = String::from_utf8_lossy(last).into_owned();
    Some(Suffixes::new(Some(name), None))
}
