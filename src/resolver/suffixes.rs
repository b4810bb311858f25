use serde::{Deserialize, Serialize};

/// Public and private (registrable) suffixes of a domain.
///
/// | Domain | `public` | `private` |
/// |--------|----------|-----------|
/// | `www.example.co.uk` | `co.uk` | `example.co.uk` |
/// | `co.uk` | `co.uk` | `None` |
/// | `example..com` | `None` | `None` |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Suffixes {
    /// The registry-controlled suffix, e.g. `com` or `kobe.jp`.
    pub public: Option<String>,
    /// The public suffix plus one label: the registrable domain.
    pub private: Option<String>,
}

impl Suffixes {
    pub fn new(public: Option<String>, private: Option<String>) -> Self {
        Self { public, private }
    }

    /// The result for a domain whose suffixes cannot be determined.
    pub fn none() -> Self {
        Self::default()
    }

    /// True if neither suffix could be determined.
    pub fn is_none(&self) -> bool {
        self.public.is_none() && self.private.is_none()
    }

    pub fn public(&self) -> Option<&str> {
        self.public.as_deref()
    }

    pub fn private(&self) -> Option<&str> {
        self.private.as_deref()
    }
}
