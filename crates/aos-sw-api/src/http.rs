// reqwest-backed transports.
//
// Both variants share TLS and timeout settings through `HttpSettings` and
// disable connection pooling: the switch closes the TCP connection after
// every exchange and stalls on a reused one.

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use crate::endpoint::TlsVerification;
use crate::error::Error;
use crate::transport::{AsyncTransport, BlockingTransport, Request, Response, Transport};

const USER_AGENT: &str = concat!("aos-sw/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client settings for both scheduling variants.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl HttpSettings {
    pub fn new(tls: TlsVerification, timeout: Duration) -> Self {
        Self { tls, timeout }
    }

    /// The extra root certificate to trust, if any.
    fn root_certificate(&self) -> Result<Option<reqwest::Certificate>, Error> {
        match &self.tls {
            TlsVerification::CustomCa(path) => {
                let cert_pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                Ok(Some(cert))
            }
            TlsVerification::SystemDefaults | TlsVerification::DangerAcceptInvalid => Ok(None),
        }
    }

    fn accept_invalid_certs(&self) -> bool {
        self.tls == TlsVerification::DangerAcceptInvalid
    }

    /// Build an async `reqwest::Client` from these settings.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(0)
            .danger_accept_invalid_certs(self.accept_invalid_certs());

        if let Some(cert) = self.root_certificate()? {
            builder = builder.add_root_certificate(cert);
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    /// Build a blocking `reqwest::blocking::Client` from these settings.
    ///
    /// Must not be called from inside an async runtime.
    pub fn build_blocking_client(&self) -> Result<reqwest::blocking::Client, Error> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .pool_max_idle_per_host(0)
            .danger_accept_invalid_certs(self.accept_invalid_certs());

        if let Some(cert) = self.root_certificate()? {
            builder = builder.add_root_certificate(cert);
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}

// ── Blocking ────────────────────────────────────────────────────────

/// Blocking transport over `reqwest::blocking`.
pub struct HttpTransport {
    client: RwLock<Option<reqwest::blocking::Client>>,
}

impl HttpTransport {
    pub fn new(settings: &HttpSettings) -> Result<Self, Error> {
        Ok(Self::with_client(settings.build_blocking_client()?))
    }

    /// Wrap a pre-built client. It should not pool connections.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self {
            client: RwLock::new(Some(client)),
        }
    }

    fn client(&self) -> Result<reqwest::blocking::Client, Error> {
        self.client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(Error::Closed)
    }
}

impl Transport for HttpTransport {
    fn close(&self) {
        self.client
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

impl BlockingTransport for HttpTransport {
    fn execute(&self, request: Request) -> Result<Response, Error> {
        let mut builder = self
            .client()?
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let resp = builder.send()?;
        let status = resp.status();
        let body = resp.text()?;
        Ok(Response { status, body })
    }
}

// ── Async ───────────────────────────────────────────────────────────

/// Async transport over `reqwest`.
pub struct AsyncHttpTransport {
    client: RwLock<Option<reqwest::Client>>,
}

impl AsyncHttpTransport {
    pub fn new(settings: &HttpSettings) -> Result<Self, Error> {
        Ok(Self::with_client(settings.build_client()?))
    }

    /// Wrap a pre-built client. It should not pool connections.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: RwLock::new(Some(client)),
        }
    }

    fn client(&self) -> Result<reqwest::Client, Error> {
        self.client
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(Error::Closed)
    }
}

impl Transport for AsyncHttpTransport {
    fn close(&self) {
        self.client
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

impl AsyncTransport for AsyncHttpTransport {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        let mut builder = self
            .client()?
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        Ok(Response { status, body })
    }
}
