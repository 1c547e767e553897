use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback shown when the server gives us nothing usable.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Categorization of client-visible API failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced a response (DNS, refused, aborted).
    Network,
    BadRequest,
    Unauthorized,
    NotFound,
    Server,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Network => write!(f, "Network"),
            ApiErrorKind::BadRequest => write!(f, "BadRequest"),
            ApiErrorKind::Unauthorized => write!(f, "Unauthorized"),
            ApiErrorKind::NotFound => write!(f, "NotFound"),
            ApiErrorKind::Server => write!(f, "Server"),
        }
    }
}

/// Structured error surfaced by the HTTP client wrapper.
///
/// `message` is already resolved to the best available text: the server's
/// `message` field, then its `error` field, then the transport error's own
/// description, then [`GENERIC_ERROR_MESSAGE`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    /// HTTP status of the response, when one was received.
    pub status: Option<u16>,
}

/// Error payload shape the backend returns on failures.
#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Transport-level failure with no HTTP response.
    pub fn network(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let message = if detail.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            detail
        };
        Self {
            kind: ApiErrorKind::Network,
            message,
            status: None,
        }
    }

    /// Build an error from a non-success HTTP response.
    ///
    /// Extracts the server's structured payload when present: the `message`
    /// field wins over the `error` field, and an unparseable or empty body
    /// falls back to the generic message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .message
            .filter(|m| !m.trim().is_empty())
            .or(parsed.error.filter(|e| !e.trim().is_empty()))
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        Self {
            kind: Self::kind_for_status(status),
            message,
            status: Some(status),
        }
    }

    fn kind_for_status(status: u16) -> ApiErrorKind {
        match status {
            401 => ApiErrorKind::Unauthorized,
            404 => ApiErrorKind::NotFound,
            400..=499 => ApiErrorKind::BadRequest,
            _ => ApiErrorKind::Server,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    /// The resolved user-facing message.
    pub fn friendly_message(&self) -> &str {
        if self.message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE
        } else {
            &self.message
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}
