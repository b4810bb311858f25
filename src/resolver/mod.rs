//! Suffix resolution.
//!
//! [`SuffixResolver`] selects the rule governing a domain and derives its
//! public and private suffixes. Each resolver owns its rule list, its
//! configuration and a bounded LRU cache, so several differently configured
//! resolvers can coexist in one process.

mod cache;
mod config;
mod resolve;
mod suffixes;

pub use cache::{SuffixCache, DEFAULT_CACHE_CAPACITY};
pub use config::ResolverConfig;
pub use resolve::SuffixResolver;
pub use suffixes::Suffixes;
