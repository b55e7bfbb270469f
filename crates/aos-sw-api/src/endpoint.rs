// Device endpoint description.
//
// Where a switch lives and how to reach it. Immutable once built; the
// versioned base URL every request is resolved against derives from it.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::error::Error;

/// URL scheme used to reach the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TLS verification strategy.
///
/// The default is [`DangerAcceptInvalid`](Self::DangerAcceptInvalid):
/// switches ship with self-signed certificates, so out of the box the
/// client does **not** verify the peer. Anything beyond a lab network
/// should pick [`SystemDefaults`](Self::SystemDefaults) or
/// [`CustomCa`](Self::CustomCa) explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    SystemDefaults,
    /// Custom CA certificate file (PEM).
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs).
    #[default]
    DangerAcceptInvalid,
}

/// A switch reachable over its REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEndpoint {
    host: String,
    api_version: u32,
    scheme: Scheme,
    tls: TlsVerification,
}

impl DeviceEndpoint {
    /// Endpoint over HTTPS with the default (non-verifying) TLS policy.
    pub fn new(host: impl Into<String>, api_version: u32) -> Self {
        Self {
            host: host.into(),
            api_version,
            scheme: Scheme::default(),
            tls: TlsVerification::default(),
        }
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_tls(mut self, tls: TlsVerification) -> Self {
        self.tls = tls;
        self
    }

    /// Host name or IP, optionally with `:port`.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn tls(&self) -> &TlsVerification {
        &self.tls
    }

    /// `{scheme}://{host}/rest/v{api_version}/`
    ///
    /// The trailing slash matters: resource paths are joined onto it.
    pub fn base_url(&self) -> Result<Url, Error> {
        let raw = format!(
            "{}://{}/rest/v{}/",
            self.scheme,
            self.host.trim_end_matches('/'),
            self.api_version
        );
        Ok(Url::parse(&raw)?)
    }
}
