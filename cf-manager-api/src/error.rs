use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Broad classification of an [`ApiError`], used by callers that only care
/// whether the exchange happened at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No usable response was received.
    Transport,
    /// The remote service answered and rejected the request.
    Api,
    /// The request was rejected locally before anything was sent.
    Client,
}

/// Error type for every zone operation.
///
/// Every variant is serializable so the CLI can print it as structured JSON.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// The request could not be sent or the response could not be read
    /// (DNS resolution, connection refused, TLS handshake, timeout, ...).
    #[error("network error: {detail}")]
    Transport {
        /// Error details from the HTTP stack.
        detail: String,
    },

    /// A response arrived but its body was not JSON.
    #[error("unreadable response (HTTP {status}): {detail}")]
    MalformedResponse {
        /// HTTP status of the response.
        status: u16,
        /// Parser diagnostic.
        detail: String,
    },

    /// The response status was outside the accepted set for the operation.
    ///
    /// `body` is the parsed response body, untouched.
    #[error("{body}")]
    Api {
        /// HTTP status of the response.
        status: u16,
        /// Response body exactly as returned by the API.
        body: Value,
    },

    /// Accepted status, but the `result` field was missing or had the wrong shape.
    #[error("unexpected result: {detail}")]
    UnexpectedResult {
        /// Deserialization diagnostic.
        detail: String,
    },

    /// An argument was rejected before any request was built.
    #[error("invalid {param}: {detail}")]
    InvalidInput {
        /// Name of the offending argument.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport { .. } | Self::MalformedResponse { .. } => FailureKind::Transport,
            Self::Api { .. } | Self::UnexpectedResult { .. } => FailureKind::Api,
            Self::InvalidInput { .. } => FailureKind::Client,
        }
    }

    pub(crate) fn invalid_input(param: &str, detail: impl Into<String>) -> Self {
        Self::InvalidInput {
            param: param.to_string(),
            detail: detail.into(),
        }
    }

    /// Error payload as returned by the API, if the failure came from one.
    pub fn api_body(&self) -> Option<&Value> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Errors raised while building a [`ClientConfig`](crate::ClientConfig) or
/// the HTTP client from it.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ConfigError {
    /// A required environment variable was unset or empty.
    #[error("missing required environment variable {0}")]
    MissingVariable(String),

    /// A credential cannot be sent as an HTTP header value.
    #[error("{0} contains characters that are not allowed in an HTTP header")]
    InvalidHeader(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
