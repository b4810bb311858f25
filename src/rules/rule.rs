use crate::base::pslerror::PslError;
use crate::labels::{labels_from_domain, DomainLabels, WILDCARD};
use std::fmt;

/// A single public suffix rule, e.g. `co.uk`, `*.kobe.jp` or `!city.kobe.jp`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    is_exception: bool,
    labels: DomainLabels,
}

impl Rule {
    pub fn new(is_exception: bool, labels: DomainLabels) -> Self {
        Self {
            is_exception,
            labels,
        }
    }

    /// The implicit `*` rule applied when nothing in the list matches.
    pub fn wildcard() -> Self {
        Self::new(false, DomainLabels::from_labels(vec![WILDCARD.to_vec()]))
    }

    /// Parse a rule from its list form. A leading `!` marks an exception.
    pub fn parse(text: &str) -> Result<Self, PslError> {
        let (is_exception, pattern) = match text.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let labels = labels_from_domain(pattern)?;
        if labels.has_empty_label() {
            return Err(PslError::malformed(text, "rule has an empty label"));
        }
        Ok(Self::new(is_exception, labels))
    }

    pub fn is_exception(&self) -> bool {
        self.is_exception
    }

    pub fn labels(&self) -> &DomainLabels {
        &self.labels
    }

    /// Number of labels in the rule pattern.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels this rule contributes to a public suffix. An exception gives
    /// up its left-most label.
    pub fn suffix_len(&self) -> usize {
        if self.is_exception {
            self.len().saturating_sub(1)
        } else {
            self.len()
        }
    }

    /// Right-aligned match: every rule label is `*` or equal to the
    /// corresponding domain label.
    pub fn matches(&self, domain: &DomainLabels) -> bool {
        self.len() <= domain.len()
            && self
                .labels
                .iter()
                .rev()
                .zip(domain.iter().rev())
                .all(|(rule, label)| rule == WILDCARD || rule == label)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({self})")
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exception {
            f.write_str("!")?;
        }
        write!(f, "{}", self.labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain(s: &str) -> DomainLabels {
        labels_from_domain(s).unwrap()
    }

    #[test]
    fn test_parse_plain() {
        let rule = Rule::parse("co.uk").unwrap();
        assert!(!rule.is_exception());
        assert_eq!(rule.len(), 2);
        assert_eq!(rule.to_string(), "co.uk");
    }

    #[test]
    fn test_parse_exception() {
        let rule = Rule::parse("!city.kobe.jp").unwrap();
        assert!(rule.is_exception());
        assert_eq!(rule.len(), 3);
        assert_eq!(rule.suffix_len(), 2);
        assert_eq!(rule.to_string(), "!city.kobe.jp");
    }

    #[test]
    fn test_parse_unicode_rule() {
        let rule = Rule::parse("公司.cn").unwrap();
        assert_eq!(rule.to_string(), "xn--55qx5d.cn");
    }

    #[test]
    fn test_parse_rejects_empty_label() {
        assert!(Rule::parse("a..b").is_err());
    }

    #[test]
    fn test_exact_match() {
        let rule = Rule::parse("co.uk").unwrap();
        assert!(rule.matches(&domain("co.uk")));
        assert!(rule.matches(&domain("bbc.co.uk")));
        assert!(!rule.matches(&domain("uk")));
        assert!(!rule.matches(&domain("co.jp")));
    }

    #[test]
    fn test_wildcard_match() {
        let rule = Rule::parse("*.kobe.jp").unwrap();
        assert!(rule.matches(&domain("c.kobe.jp")));
        assert!(rule.matches(&domain("a.b.c.kobe.jp")));
        assert!(!rule.matches(&domain("kobe.jp")));
    }

    #[test]
    fn test_implicit_wildcard() {
        let rule = Rule::wildcard();
        assert_eq!(rule.len(), 1);
        assert!(!rule.is_exception());
        assert!(rule.matches(&domain("anything")));
        assert!(rule.matches(&domain("example.unlistedtld")));
    }
}
