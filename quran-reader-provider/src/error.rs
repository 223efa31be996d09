use serde::{Deserialize, Serialize};

/// Unified error type for all content provider operations.
///
/// Each variant includes a `provider` field identifying which provider produced the error,
/// plus variant-specific context. All variants are serializable for structured error reporting.
///
/// Requests are never retried by this crate; callers decide what to do with
/// transient failures such as [`NetworkError`](Self::NetworkError) and
/// [`Timeout`](Self::Timeout).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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

    /// The API answered with a non-success status.
    ApiError {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status (or the `code` field of the response envelope).
        status: u16,
        /// Message returned by the API.
        message: String,
    },

    /// The requested section does not exist on the remote side.
    SectionNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Requested section id.
        section_id: u32,
    },

    /// A request parameter is invalid (e.g., section id out of range, malformed edition).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::SectionNotFound { .. } | Self::InvalidParameter { .. }
        )
    }

    /// Identifier of the provider that produced this error.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::SectionNotFound { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::ParseError { provider, .. } => provider,
        }
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
            Self::ApiError {
                provider,
                status,
                message,
            } => {
                write!(f, "[{provider}] API error (HTTP {status}): {message}")
            }
            Self::SectionNotFound {
                provider,
                section_id,
            } => {
                write!(f, "[{provider}] Section {section_id} not found")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
