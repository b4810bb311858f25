//! Domain name to label sequence conversion.
//!
//! Every comparison in the crate happens on normalized byte labels: the
//! input is lowercased, split on `.`, and any label holding non-ASCII code
//! points is converted to its A-label with strict, IDNA2003-compatible
//! (UTS 46 transitional) processing.

use crate::base::pslerror::PslError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The full-label wildcard used by suffix rules.
pub const WILDCARD: &[u8] = b"*";

/// How a trailing dot on a domain name is treated.
///
/// A single leading dot is always stripped, so `.example.com` (the usual
/// form of a cookie `Domain` attribute) normalizes to `example.com`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DotPolicy {
    /// Strip one trailing dot, treating `example.com.` like `example.com`.
    #[default]
    Lenient,
    /// A trailing dot marks an incomplete name and is rejected.
    Strict,
}

impl DotPolicy {
    /// Strip the edges this policy tolerates. Under [`DotPolicy::Strict`]
    /// the trailing dot is left in place.
    fn trim(self, domain: &str) -> &str {
        let domain = domain.strip_prefix('.').unwrap_or(domain);
        match self {
            DotPolicy::Lenient => domain.strip_suffix('.').unwrap_or(domain),
            DotPolicy::Strict => domain,
        }
    }
}

/// A normalized domain name, most specific label first.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DomainLabels {
    labels: Vec<Vec<u8>>,
}

impl DomainLabels {
    /// Wrap already-normalized labels.
    pub fn from_labels(labels: Vec<Vec<u8>>) -> Self {
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn as_slice(&self) -> &[Vec<u8>] {
        &self.labels
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &[u8]> + ExactSizeIterator {
        self.labels.iter().map(Vec::as_slice)
    }

    /// The root-most label, e.g. `com` for `www.example.com`.
    pub fn last(&self) -> Option<&[u8]> {
        self.labels.last().map(Vec::as_slice)
    }

    /// True if any label is zero-length (e.g. `example..com`).
    pub fn has_empty_label(&self) -> bool {
        self.labels.iter().any(Vec::is_empty)
    }

    /// The trailing `count` labels. Saturates at the full sequence.
    pub fn trailing(&self, count: usize) -> &[Vec<u8>] {
        let start = self.labels.len().saturating_sub(count);
        &self.labels[start..]
    }

    /// Literal label-aligned suffix test: `parent`'s labels appear, unchanged,
    /// as the trailing labels of `self`. A name is a subdomain of itself.
    pub fn is_subdomain_of(&self, parent: &DomainLabels) -> bool {
        parent.len() <= self.len()
            && self
                .labels
                .iter()
                .rev()
                .zip(parent.labels.iter().rev())
                .all(|(child, parent)| child == parent)
    }

    /// Join the labels back into a display string.
    pub fn to_domain(&self) -> String {
        domain_from_labels(&self.labels)
    }

    /// Render the name with A-labels decoded back to Unicode.
    pub fn to_unicode(&self) -> String {
        let (unicode, _) = idna::domain_to_unicode(&self.to_domain());
        unicode
    }
}

impl fmt::Debug for DomainLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.labels.iter().map(|l| String::from_utf8_lossy(l)))
            .finish()
    }
}

impl fmt::Display for DomainLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_domain())
    }
}

/// Split a domain name into normalized labels using [`DotPolicy::Lenient`].
pub fn labels_from_domain(domain: &str) -> Result<DomainLabels, PslError> {
    labels_from_domain_with(domain, DotPolicy::Lenient)
}

/// Split a domain name into normalized labels.
///
/// Empty labels are kept so callers can detect them; only IDNA failures and
/// (under [`DotPolicy::Strict`]) a trailing dot are errors. A name that already
/// has an interior empty label (`a..b.`) is returned with its empty labels
/// rather than rejected for the trailing dot.
pub fn labels_from_domain_with(domain: &str, policy: DotPolicy) -> Result<DomainLabels, PslError> {
    let trimmed = policy.trim(domain);
    if policy == DotPolicy::Strict {
        if let Some(body) = trimmed.strip_suffix('.') {
            if !body.split('.').any(str::is_empty) {
                return Err(PslError::malformed(domain, "trailing dot"));
            }
        }
    }

    let lowered = trimmed.to_lowercase();
    let labels = lowered
        .split('.')
        .map(|label| encode_label(label, domain))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DomainLabels { labels })
}

/// Join labels with `.` into a string.
pub fn domain_from_labels(labels: &[Vec<u8>]) -> String {
    String::from_utf8_lossy(&labels.join(&b'.')).into_owned()
}

/// True if the domain has a zero-length label once the edges tolerated by
/// [`DotPolicy::Lenient`] are stripped.
pub fn contains_empty_label(domain: &str) -> bool {
    contains_empty_label_with(domain, DotPolicy::Lenient)
}

/// True if the domain has a zero-length label once `policy` has stripped
/// the edges it tolerates.
pub fn contains_empty_label_with(domain: &str, policy: DotPolicy) -> bool {
    policy.trim(domain).split('.').any(str::is_empty)
}

fn encode_label(label: &str, domain: &str) -> Result<Vec<u8>, PslError> {
    if label.is_ascii() {
        return Ok(label.as_bytes().to_vec());
    }

    let ascii = to_ascii_transitional(label)
        .map_err(|e| PslError::malformed(domain, format!("invalid IDNA label '{label}': {e}")))?;

    // Some code points (e.g. U+3002) map to a separator under UTS 46.
    if ascii.is_empty() || ascii.contains('.') {
        return Err(PslError::malformed(
            domain,
            format!("label '{label}' does not encode to a single A-label"),
        ));
    }

    Ok(ascii.into_bytes())
}

/// UTS 46 ToASCII with transitional mapping (IDNA2003 compatible), STD3
/// ASCII rules, hyphen placement checks and DNS length verification.
///
/// Deviation characters map the IDNA2003 way: `ß` to `ss`, `ς` to `σ`, and
/// ZWJ/ZWNJ are removed.
#[allow(deprecated)]
fn to_ascii_transitional(label: &str) -> Result<String, idna::Errors> {
    idna::Config::default()
        .transitional_processing(true)
        .use_std3_ascii_rules(true)
        .check_hyphens(true)
        .verify_dns_length(true)
        .to_ascii(label)
}
