//! Suffix rules and the rule list they are loaded from.

mod list;
mod rule;

pub use list::{RuleList, RuleSource, ICANN_SECTION_END, PUBLIC_SUFFIX_URL};
pub use rule::Rule;
