//! Domain label normalization.
//!
//! Rules and queried domains share one normal form before they are compared:
//! lowercase, dot-split, with non-ASCII labels converted to A-labels.
//!
//! ```rust
//! use pubsuffix::labels::{domain_from_labels, labels_from_domain};
//!
//! let labels = labels_from_domain("WWW.食狮.公司.cn")?;
//! assert_eq!(domain_from_labels(labels.as_slice()), "www.xn--85x722f.xn--55qx5d.cn");
//! # Ok::<(), pubsuffix::base::PslError>(())
//! ```

mod codec;

pub use codec::{
    contains_empty_label, contains_empty_label_with, domain_from_labels, labels_from_domain,
    labels_from_domain_with, DomainLabels, DotPolicy, WILDCARD,
};
