use serde::{Deserialize, Serialize};

/// Unified error type for all provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// # Recoverable Errors
///
/// [`NotFound`](Self::NotFound) is the only variant the provider itself recovers from:
/// zone population treats a missing zone as empty, and apply treats a missing domain
/// as "create it first". Every other variant is surfaced to the caller unchanged.
/// Nothing is retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API token is missing, invalid or revoked (HTTP 401).
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The requested domain, zone or record does not exist (HTTP 404).
    NotFound {
        /// Provider that produced the error.
        provider: String,
        /// API path of the missing resource.
        resource: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// Any other non-success HTTP status.
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The requested DNS record type is not supported by this provider.
    UnsupportedRecordType {
        /// Provider that produced the error.
        provider: String,
        /// The unsupported record type string.
        record_type: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（资源不存在、凭证无效等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::NotFound { .. }
                | Self::UnsupportedRecordType { .. }
        )
    }

    /// Whether this is the recoverable "resource does not exist" condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Unauthorized: {msg}")
                } else {
                    write!(f, "[{provider}] Unauthorized")
                }
            }
            Self::NotFound {
                provider, resource, ..
            } => {
                write!(f, "[{provider}] Not found: {resource}")
            }
            Self::HttpStatus {
                provider,
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message.as_deref().filter(|m| !m.is_empty()) {
                    write!(f, "[{provider}] HTTP {status}: {msg}")
                } else {
                    write!(f, "[{provider}] HTTP {status}")
                }
            }
            Self::UnsupportedRecordType {
                provider,
                record_type,
            } => {
                write!(f, "[{provider}] Unsupported record type: {record_type}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
