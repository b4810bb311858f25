//! Public Suffix List parsing.
//!
//! The list format is line oriented: blank lines and `//` comments are
//! skipped, `!` marks an exception rule, and `*` is a whole-label wildcard.
//! Rules above the `===END ICANN DOMAINS===` marker come from the ICANN/IANA
//! root zone; rules below it are privately contributed.

use crate::base::pslerror::PslError;
use crate::labels::DomainLabels;
use crate::rules::rule::Rule;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Marker line separating ICANN rules from private rules.
pub const ICANN_SECTION_END: &str = "===END ICANN DOMAINS===";

/// Upstream location of the Mozilla-maintained list.
pub const PUBLIC_SUFFIX_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";

/// Snapshot of the list compiled into the crate.
const EMBEDDED_LIST: &str = include_str!("../../resources/public_suffix_list.dat");

static EMBEDDED: Lazy<Arc<RuleList>> = Lazy::new(|| Arc::new(RuleList::parse(EMBEDDED_LIST)));

/// Where a resolver loads its rule list from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSource {
    /// The snapshot compiled into the crate.
    #[default]
    Embedded,
    /// A list file on disk, read once at resolver construction.
    Path(PathBuf),
    /// List text supplied directly.
    Inline(String),
}

impl RuleSource {
    /// Load the rule list, failing if it cannot be read or has no rules.
    pub fn load(&self) -> Result<Arc<RuleList>, PslError> {
        match self {
            RuleSource::Embedded => Ok(RuleList::embedded()),
            RuleSource::Path(path) => RuleList::from_path(path).map(Arc::new),
            RuleSource::Inline(text) => RuleList::from_text(text, "inline").map(Arc::new),
        }
    }
}

/// An immutable, parsed rule list.
///
/// Rules keep their source order. ICANN-only lookups iterate the prefix of
/// the list that precedes [`ICANN_SECTION_END`].
#[derive(Debug, Clone, Default)]
pub struct RuleList {
    rules: Vec<Rule>,
    icann_len: usize,
}

impl RuleList {
    /// The shared, lazily parsed embedded list.
    pub fn embedded() -> Arc<RuleList> {
        Arc::clone(&EMBEDDED)
    }

    /// Parse list text. Lines that cannot be normalized are skipped.
    pub fn parse(text: &str) -> Self {
        let mut rules = Vec::new();
        let mut icann_len = None;

        for line in text.lines() {
            let line = line.trim();

            if icann_len.is_none() && line.contains(ICANN_SECTION_END) {
                icann_len = Some(rules.len());
                continue;
            }
            if line.is_empty() || line.starts_with("//") {
                continue;
            }

            // Only the text up to the first whitespace is the rule.
            let pattern = line.split_whitespace().next().unwrap_or(line);
            match Rule::parse(pattern) {
                Ok(rule) => rules.push(rule),
                Err(e) => tracing::warn!(rule = %pattern, error = %e, "skipping unparsable rule"),
            }
        }

        let icann_len = icann_len.unwrap_or(rules.len());
        tracing::debug!(
            rules = rules.len(),
            icann = icann_len,
            "parsed public suffix list"
        );

        Self { rules, icann_len }
    }

    /// Parse list text, rejecting a list with no rules.
    pub fn from_text(text: &str, origin: &str) -> Result<Self, PslError> {
        let list = Self::parse(text);
        if list.is_empty() {
            return Err(PslError::EmptyRuleList {
                origin: origin.to_string(),
            });
        }
        Ok(list)
    }

    /// Read and parse a list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PslError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| PslError::rule_list_io(&shown, e))?;
        tracing::debug!(path = %shown, bytes = text.len(), "loading public suffix list");
        Self::from_text(&text, &shown)
    }

    /// The rules consulted for a lookup, in source order.
    pub fn rules(&self, icann_only: bool) -> &[Rule] {
        if icann_only {
            &self.rules[..self.icann_len]
        } else {
            &self.rules
        }
    }

    /// Rules matching `domain`, in source order.
    pub fn matching<'a, 'd>(
        &'a self,
        domain: &'d DomainLabels,
        icann_only: bool,
    ) -> impl Iterator<Item = &'a Rule> + 'd
    where
        'a: 'd,
    {
        self.rules(icann_only)
            .iter()
            .filter(move |rule| rule.matches(domain))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules in the ICANN section.
    pub fn icann_len(&self) -> usize {
        self.icann_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::labels_from_domain;

    const SAMPLE: &str = "\
// ===BEGIN ICANN DOMAINS===

// jp
jp
*.kobe.jp
!city.kobe.jp   trailing notes are ignored

// ===END ICANN DOMAINS===
// ===BEGIN PRIVATE DOMAINS===
blogspot.jp
";

    #[test]
    fn test_parse_sections() {
        let list = RuleList::parse(SAMPLE);
        assert_eq!(list.len(), 4);
        assert_eq!(list.icann_len(), 3);
        assert_eq!(list.rules(true).len(), 3);
        assert_eq!(list.rules(false).len(), 4);
    }

    #[test]
    fn test_parse_exception_and_whitespace() {
        let list = RuleList::parse(SAMPLE);
        let exception = &list.rules(false)[2];
        assert!(exception.is_exception());
        assert_eq!(exception.to_string(), "!city.kobe.jp");
    }

    #[test]
    fn test_no_marker_means_all_icann() {
        let list = RuleList::parse("com\nnet\n");
        assert_eq!(list.icann_len(), 2);
        assert_eq!(list.rules(true).len(), 2);
    }

    #[test]
    fn test_skips_bad_rules() {
        let list = RuleList::parse("com\nbad..rule\nnet\n");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_matching() {
        let list = RuleList::parse(SAMPLE);
        let domain = labels_from_domain("www.city.kobe.jp").unwrap();
        let matched: Vec<String> = list
            .matching(&domain, false)
            .map(|r| r.to_string())
            .collect();
        assert_eq!(matched, ["jp", "*.kobe.jp", "!city.kobe.jp"]);
    }

    #[test]
    fn test_matching_is_restartable() {
        let list = RuleList::parse(SAMPLE);
        let domain = labels_from_domain("foo.blogspot.jp").unwrap();
        assert_eq!(list.matching(&domain, false).count(), 2);
        assert_eq!(list.matching(&domain, false).count(), 2);
        assert_eq!(list.matching(&domain, true).count(), 1);
    }

    #[test]
    fn test_empty_text_rejected() {
        let err = RuleList::from_text("// only comments\n\n", "inline").unwrap_err();
        assert!(matches!(err, PslError::EmptyRuleList { .. }));
    }

    #[test]
    fn test_embedded_list_loads() {
        let list = RuleList::embedded();
        assert!(list.len() > 1000);
        assert!(list.icann_len() < list.len());
    }

    #[test]
    fn test_from_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file.flush().unwrap();

        let list = RuleList::from_path(file.path()).unwrap();
        assert_eq!(list.len(), 4);
        assert_eq!(list.icann_len(), 3);

        let source = RuleSource::Path(file.path().to_path_buf());
        assert_eq!(source.load().unwrap().len(), 4);
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = RuleList::from_path(dir.path().join("absent.dat")).unwrap_err();
        assert!(matches!(err, PslError::RuleListNotFound { .. }));
    }

    #[test]
    fn test_source_inline() {
        let list = RuleSource::Inline("com\n".into()).load().unwrap();
        assert_eq!(list.len(), 1);
    }
}
