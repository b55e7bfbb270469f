// ── Runtime connection configuration ──
//
// Describes how to reach and log in to one switch. Never touches disk:
// the CLI (or any caller) builds a `SwitchConfig` and hands it to a facade.

use std::time::Duration;

use crate::auth::Credentials;
use crate::endpoint::DeviceEndpoint;
use crate::http::HttpSettings;

/// Everything a session facade needs to talk to one switch.
#[derive(Debug, Clone)]
pub struct SwitchConfig {
    /// Where the switch is and how TLS is checked.
    pub endpoint: DeviceEndpoint,
    /// Login credentials, optionally with a cookie to resume.
    pub credentials: Credentials,
    /// Log out on scoped exit. Turn off to keep the session alive on the
    /// switch after the client is done (for cookie reuse).
    pub auto_logout: bool,
    /// Per-request timeout of the HTTP client.
    pub timeout: Duration,
}

impl SwitchConfig {
    pub fn new(endpoint: DeviceEndpoint, credentials: Credentials) -> Self {
        Self {
            endpoint,
            credentials,
            auto_logout: true,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_auto_logout(mut self, auto_logout: bool) -> Self {
        self.auto_logout = auto_logout;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn http_settings(&self) -> HttpSettings {
        HttpSettings::new(self.endpoint.tls().clone(), self.timeout)
    }
}

/// Where a facade is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, no login yet (or login failed).
    Unauthenticated,
    /// Logged in; resource calls are allowed.
    Authenticated,
    /// Connection released. Terminal.
    Closed,
}
