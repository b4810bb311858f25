use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PslError {
    // Normalization Errors
    #[error("Malformed domain '{domain}': {reason}")]
    MalformedDomain { domain: String, reason: String },

    // Rule List Errors
    #[error("Rule list not found: {path}")]
    RuleListNotFound { path: String },
    #[error("Rule list {path} could not be read: {message}")]
    RuleListUnreadable { path: String, message: String },
    #[error("Rule list {origin} contains no rules")]
    EmptyRuleList { origin: String },

    // Configuration Errors
    #[error("Invalid resolver configuration: {0}")]
    InvalidConfig(String),
}

impl PslError {
    /// Create a malformed domain error.
    pub fn malformed(domain: impl Into<String>, reason: impl Into<String>) -> Self {
        PslError::MalformedDomain {
            domain: domain.into(),
            reason: reason.into(),
        }
    }

    /// Create a rule list read error from an IO failure.
    pub fn rule_list_io(path: impl Into<String>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            PslError::RuleListNotFound { path }
        } else {
            PslError::RuleListUnreadable {
                path,
                message: err.to_string(),
            }
        }
    }

    /// True for errors raised while normalizing a domain name.
    pub fn is_malformed_domain(&self) -> bool {
        matches!(self, PslError::MalformedDomain { .. })
    }

    /// True for errors raised while loading the rule resource.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            PslError::RuleListNotFound { .. }
                | PslError::RuleListUnreadable { .. }
                | PslError::EmptyRuleList { .. }
        )
    }
}
