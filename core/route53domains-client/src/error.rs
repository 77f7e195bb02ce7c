//! Error types for the client layer.

use std::fmt;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while invoking an operation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request record failed validation, or a response token was not in its registry.
    #[error("model error: {0}")]
    Model(#[from] route53domains_types::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network error.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with an error document.
    #[error("{kind} (HTTP {status}): {message}")]
    Service {
        kind: ServiceErrorKind,
        status: u16,
        message: String,
    },

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// An asynchronous operation did not finish while being polled.
    #[error("operation {operation_id} still pending after {attempts} polls")]
    OperationPending { operation_id: String, attempts: u32 },
}

impl ClientError {
    /// The service error kind, if the service rejected the request.
    #[must_use]
    pub fn service_kind(&self) -> Option<&ServiceErrorKind> {
        match self {
            Self::Service { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Error codes the service reports in `__type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    DomainLimitExceeded,
    DuplicateRequest,
    InvalidInput,
    OperationLimitExceeded,
    TldRulesViolation,
    UnsupportedTld,
    /// Any code this client does not model, kept verbatim.
    Unknown(String),
}

impl ServiceErrorKind {
    /// Maps an error type such as `com.amazonaws.route53domains#InvalidInput`.
    ///
    /// Anything before `#` is a namespace and is ignored, as is a trailing
    /// `:<uri>` suffix.
    #[must_use]
    pub fn from_type(error_type: &str) -> Self {
        let code = error_type.rsplit('#').next().unwrap_or(error_type);
        let code = code.split(':').next().unwrap_or(code).trim();
        match code {
            "DomainLimitExceeded" => Self::DomainLimitExceeded,
            "DuplicateRequest" => Self::DuplicateRequest,
            "InvalidInput" => Self::InvalidInput,
            "OperationLimitExceeded" => Self::OperationLimitExceeded,
            "TLDRulesViolation" => Self::TldRulesViolation,
            "UnsupportedTLD" => Self::UnsupportedTld,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The wire code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DomainLimitExceeded => "DomainLimitExceeded",
            Self::DuplicateRequest => "DuplicateRequest",
            Self::InvalidInput => "InvalidInput",
            Self::OperationLimitExceeded => "OperationLimitExceeded",
            Self::TldRulesViolation => "TLDRulesViolation",
            Self::UnsupportedTld => "UnsupportedTLD",
            Self::Unknown(code) => code,
        }
    }

    /// Whether retrying the same request later can succeed.
    #[must_use]
    pub fn is_throttling(&self) -> bool {
        matches!(self, Self::OperationLimitExceeded)
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
