use thiserror::Error;

/// Top-level error type for the `aos-sw-api` crate.
///
/// Covers every failure mode of a switch session: transport, login,
/// logout, resource calls, and local lifecycle misuse. The CLI maps these
/// into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login rejected by the switch, preset cookie unusable, or the login
    /// exchange itself could not reach the device.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Logout could not be completed. Never fatal to teardown: the
    /// connection is released regardless.
    #[error("Logout failed: {message}")]
    Logout { message: String },

    /// A resource call was attempted with no session attached.
    /// Raised before anything is sent.
    #[error("Not authenticated -- log in before calling the switch API")]
    NotAuthenticated,

    /// A second login was attempted while a session is still attached.
    #[error("A session is already active on this connection")]
    SessionActive,

    // ── Transport ───────────────────────────────────────────────────
    /// Transport-level failure (DNS, TLS handshake, connection reset, timeout).
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The connection was already released.
    #[error("Connection already closed")]
    Closed,

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A caller-supplied id would leave its resource path (`.` or `..`).
    #[error("Invalid resource path: {0}")]
    InvalidPath(String),

    /// TLS configuration or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Switch API ──────────────────────────────────────────────────
    /// Non-2xx answer to a resource call, with the device's status and body.
    #[error("Switch API error (HTTP {status}): {body}")]
    ResourceOperation { status: u16, body: String },

    // ── Data ────────────────────────────────────────────────────────
    /// A request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Connection(Box::new(err))
    }
}

impl Error {
    /// Returns `true` for errors that mean the session is missing or was
    /// refused, where logging in again might help.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::Authentication { .. } | Self::NotAuthenticated => true,
            Self::ResourceOperation { status, .. } => *status == 401,
            _ => false,
        }
    }

    /// Returns `true` if this is a transport failure worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` if the switch answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceOperation { status: 404, .. })
    }

    /// The HTTP status the device answered with, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ResourceOperation { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_errors_expose_status() {
        let err = Error::ResourceOperation {
            status: 404,
            body: "{\"message\":\"no such vlan\"}".into(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_auth_error());
    }

    #[test]
    fn unauthorized_resource_call_counts_as_auth_error() {
        let err = Error::ResourceOperation {
            status: 401,
            body: String::new(),
        };
        assert!(err.is_auth_error());
        assert!(Error::NotAuthenticated.is_auth_error());
    }

    #[test]
    fn connection_errors_are_transient() {
        let err = Error::Connection("connection reset by peer".into());
        assert!(err.is_transient());
        assert_eq!(err.to_string(), "Connection error: connection reset by peer");
    }
}
