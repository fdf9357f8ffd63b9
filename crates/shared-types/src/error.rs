use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback shown when the server rejects a request without saying why.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Categorization of client request failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// The request never produced an HTTP response.
    Network,
    /// The server answered with a non-success status.
    Application,
    /// The server answered with a body we could not parse.
    Decode,
    /// A required field was missing before anything was sent.
    Validation,
    /// The session could not be written to local storage.
    Storage,
}

impl fmt::Display for RequestErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestErrorKind::Network => write!(f, "Network"),
            RequestErrorKind::Application => write!(f, "Application"),
            RequestErrorKind::Decode => write!(f, "Decode"),
            RequestErrorKind::Validation => write!(f, "Validation"),
            RequestErrorKind::Storage => write!(f, "Storage"),
        }
    }
}

/// Error returned by every client operation.
///
/// Only `message` is meant for people; `kind` and `status` exist for logs
/// and tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestError {
    pub kind: RequestErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
}

/// Error payload the backend sends with non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl RequestError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: RequestErrorKind::Network,
            status: None,
            message: message.into(),
        }
    }

    pub fn application(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: RequestErrorKind::Application,
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: RequestErrorKind::Decode,
            status: None,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: RequestErrorKind::Validation,
            status: None,
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self {
            kind: RequestErrorKind::Storage,
            status: None,
            message: message.into(),
        }
    }

    /// Build an application error from a non-success response body.
    ///
    /// Uses the `error` field when the body is JSON and carries a non-empty
    /// one, otherwise [`GENERIC_ERROR_MESSAGE`].
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        Self::application(status, message)
    }

    /// True when the failure happened before any request was issued.
    pub fn is_validation(&self) -> bool {
        self.kind == RequestErrorKind::Validation
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RequestError {}
