// Shared transport layer.
//
// `TransportHandle` wraps one raw transport (blocking or async) bound to a
// switch's versioned base URL. It owns the session slot, stamps every
// outgoing request with `Connection: close`, and releases the underlying
// client exactly once. Resource clients and the authenticator all hold the
// same handle through an `Arc`.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use reqwest::header::{CONNECTION, COOKIE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};
use url::Url;

use crate::auth::AuthContext;
use crate::call::{Access, Draft};
use crate::error::Error;

/// A fully resolved request, ready for the wire.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

/// What came back from the switch, body already read.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

impl Response {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", self.preview()),
            body: self.body.clone(),
        })
    }

    /// First 200 bytes of the body, for error messages.
    pub(crate) fn preview(&self) -> &str {
        let mut end = self.body.len().min(200);
        while !self.body.is_char_boundary(end) {
            end -= 1;
        }
        &self.body[..end]
    }
}

// ── Transport capabilities ──────────────────────────────────────────

/// Capabilities shared by both scheduling variants.
pub trait Transport: Send + Sync {
    /// Drop the underlying connection resources. Called at most once per
    /// handle.
    fn close(&self);
}

/// A transport whose requests block the calling thread.
pub trait BlockingTransport: Transport {
    fn execute(&self, request: Request) -> Result<Response, Error>;
}

/// A transport whose requests suspend the calling task.
pub trait AsyncTransport: Transport {
    fn execute(&self, request: Request) -> impl Future<Output = Result<Response, Error>> + Send;
}

// ── Handle ──────────────────────────────────────────────────────────

/// The single connection to a switch, shared by every sub-client of one
/// session facade.
///
/// Holds at most one [`AuthContext`]. Released exactly once, either by the
/// facade or on drop.
pub struct TransportHandle<T: Transport> {
    transport: T,
    base_url: Url,
    session: RwLock<Option<AuthContext>>,
    released: AtomicBool,
}

impl<T: Transport> TransportHandle<T> {
    pub fn new(transport: T, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
            session: RwLock::new(None),
            released: AtomicBool::new(false),
        }
    }

    /// The versioned base URL (`…/rest/v{n}/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    /// Snapshot of the attached session, if any.
    pub fn session(&self) -> Option<AuthContext> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Attach a freshly obtained session. Fails if one is already attached.
    pub(crate) fn attach(&self, context: AuthContext) -> Result<(), Error> {
        let mut slot = self.session.write().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return Err(Error::SessionActive);
        }
        debug!("session attached");
        *slot = Some(context);
        Ok(())
    }

    /// Remove the session, returning it if one was attached.
    pub(crate) fn detach(&self) -> Option<AuthContext> {
        let context = self
            .session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if context.is_some() {
            debug!("session detached");
        }
        context
    }

    /// Release the underlying transport. Only the first call has an effect.
    pub fn close(&self) {
        if self.released.swap(true, Ordering::AcqRel) {
            trace!("transport already released");
            return;
        }
        debug!(base_url = %self.base_url, "releasing transport");
        self.transport.close();
    }

    /// Resolve a draft into a wire request.
    ///
    /// Session-scoped drafts fail with [`Error::NotAuthenticated`] when no
    /// session is attached; nothing reaches the transport in that case.
    pub(crate) fn prepare(&self, draft: Draft) -> Result<Request, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONNECTION, HeaderValue::from_static("close"));

        if draft.access == Access::Session {
            let slot = self.session.read().unwrap_or_else(PoisonError::into_inner);
            let context = slot.as_ref().ok_or(Error::NotAuthenticated)?;
            let mut cookie = HeaderValue::from_str(context.cookie().expose_secret()).map_err(
                |_| Error::Authentication {
                    message: "session cookie is not a valid header value".into(),
                },
            )?;
            cookie.set_sensitive(true);
            headers.insert(COOKIE, cookie);
        }

        if self.is_released() {
            return Err(Error::Closed);
        }

        let path = draft.path.trim_start_matches('/');
        if path.split('/').any(is_dot_segment) {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        let url = self.base_url.join(path)?;

        Ok(Request {
            method: draft.method,
            url,
            headers,
            body: draft.body,
        })
    }
}

/// `Url::join` resolves these even when percent-encoded.
fn is_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | "%2e%2e" | ".%2e" | "%2e."
    )
}

impl<T: Transport> Drop for TransportHandle<T> {
    fn drop(&mut self) {
        if !self.is_released() {
            if self.is_authenticated() {
                warn!("connection dropped with an active session; the switch keeps it until timeout");
            }
            self.close();
        }
    }
}
