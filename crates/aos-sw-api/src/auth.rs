// Session authentication
//
// Cookie-based login/logout against `/rest/v{n}/login-sessions`.
// A successful login returns `{"cookie": "sessionId=..."}`; that value is
// attached to the transport handle and sent as the `Cookie` header on
// every later request.

use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::call::{Call, Draft};
use crate::error::Error;
use crate::transport::{Response, Transport, TransportHandle};

const LOGIN_SESSIONS: &str = "login-sessions";
const SESSION_COOKIE: &str = "sessionId";

/// Username/password for the switch, plus an optional session cookie
/// obtained earlier.
///
/// When a cookie is present, login reuses it and never sends the
/// username/password to the switch.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
    cookie: Option<SecretString>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
            cookie: None,
        }
    }

    /// Reuse an existing session instead of logging in.
    ///
    /// Accepts either the full `sessionId=<token>` pair or the bare token.
    pub fn with_cookie(mut self, cookie: SecretString) -> Self {
        self.cookie = Some(cookie);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn has_cookie(&self) -> bool {
        self.cookie.is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("cookie", &self.cookie.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// An authenticated session: the cookie the switch handed out.
#[derive(Debug, Clone)]
pub struct AuthContext {
    cookie: SecretString,
}

impl AuthContext {
    /// Build a context from a raw cookie, adding the `sessionId=` name
    /// when only the token was given.
    pub fn from_cookie(raw: &str) -> Self {
        let raw = raw.trim();
        // Tokens may carry base64 padding, so `=` alone proves nothing.
        let cookie = if raw.starts_with(&format!("{SESSION_COOKIE}=")) {
            raw.to_owned()
        } else {
            format!("{SESSION_COOKIE}={raw}")
        };
        Self {
            cookie: SecretString::from(cookie),
        }
    }

    /// The `Cookie` header value, e.g. `sessionId=abc123`.
    ///
    /// Persist it and feed it back through [`Credentials::with_cookie`]
    /// to resume the session later.
    pub fn cookie(&self) -> &SecretString {
        &self.cookie
    }
}

/// Body of a successful `POST login-sessions`.
#[derive(Debug, Deserialize)]
struct LoginSession {
    cookie: String,
}

/// Logs in and out on behalf of one transport handle.
///
/// The only component that creates or destroys the handle's [`AuthContext`].
pub struct Authenticator<T: Transport> {
    handle: Arc<TransportHandle<T>>,
    credentials: Credentials,
}

impl<T: Transport> Authenticator<T> {
    pub fn new(handle: Arc<TransportHandle<T>>, credentials: Credentials) -> Self {
        Self {
            handle,
            credentials,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Establish a session.
    ///
    /// With a preset cookie the cookie is attached directly and nothing is
    /// sent. Otherwise `POST login-sessions` with `{userName, password}`.
    /// Rejection (non-2xx) or a failed exchange is
    /// [`Error::Authentication`]; an already attached session is
    /// [`Error::SessionActive`].
    pub fn login(&self) -> Call<'_, T, AuthContext> {
        if self.handle.is_authenticated() {
            return Call::ready(&self.handle, Err(Error::SessionActive));
        }

        if let Some(ref cookie) = self.credentials.cookie {
            debug!("reusing preset session cookie, skipping credential exchange");
            let context = AuthContext::from_cookie(cookie.expose_secret());
            let attached = self.handle.attach(context.clone()).map(|()| context);
            return Call::ready(&self.handle, attached);
        }

        debug!(username = %self.credentials.username, "logging in");
        let body = json!({
            "userName": self.credentials.username,
            "password": self.credentials.password.expose_secret(),
        });
        Call::exchange(
            &self.handle,
            Draft::anonymous(Method::POST, LOGIN_SESSIONS, Some(body)),
            finish_login::<T>,
        )
    }

    /// End the session on the switch.
    ///
    /// A no-op when no session is attached. The local session is dropped
    /// whatever the switch answers; failures come back as [`Error::Logout`].
    pub fn logout(&self) -> Call<'_, T, ()> {
        if !self.handle.is_authenticated() {
            debug!("no active session, skipping logout");
            return Call::ready(&self.handle, Ok(()));
        }

        debug!("logging out");
        Call::exchange(
            &self.handle,
            Draft::session(Method::DELETE, LOGIN_SESSIONS, None),
            finish_logout::<T>,
        )
    }
}

fn finish_login<T: Transport>(
    handle: &TransportHandle<T>,
    outcome: Result<Response, Error>,
) -> Result<AuthContext, Error> {
    let response = outcome.map_err(|e| match e {
        Error::Connection(source) => Error::Authentication {
            message: format!("login request failed: {source}"),
        },
        other => other,
    })?;

    if !response.is_success() {
        return Err(Error::Authentication {
            message: format!("login failed (HTTP {}): {}", response.status, response.preview()),
        });
    }

    let session: LoginSession = response.json().map_err(|e| Error::Authentication {
        message: format!("unexpected login response: {e}"),
    })?;

    let context = AuthContext::from_cookie(&session.cookie);
    handle.attach(context.clone())?;
    info!("login successful");
    Ok(context)
}

fn finish_logout<T: Transport>(
    handle: &TransportHandle<T>,
    outcome: Result<Response, Error>,
) -> Result<(), Error> {
    handle.detach();

    let response = outcome.map_err(|e| Error::Logout {
        message: e.to_string(),
    })?;

    if !response.is_success() {
        return Err(Error::Logout {
            message: format!("HTTP {}: {}", response.status, response.preview()),
        });
    }

    debug!("logout complete");
    Ok(())
}
