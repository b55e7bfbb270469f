// Blocking session facade.
//
// Owns the transport handle, the authenticator and every resource client,
// and drives the `Unauthenticated -> Authenticated -> Closed` lifecycle.
// `scope` is the normal entry point: it logs in, runs the caller's work,
// and always tears the session down afterwards.

use std::ops::Deref;
use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::auth::{AuthContext, Authenticator};
use crate::config::{SessionState, SwitchConfig};
use crate::error::Error;
use crate::http::HttpTransport;
use crate::registry::Resources;
use crate::transport::{BlockingTransport, TransportHandle};

/// Blocking client for one switch.
///
/// Resource clients are reached through deref:
///
/// ```no_run
/// # use aos_sw_api::{Client, Credentials, DeviceEndpoint, SwitchConfig};
/// # use secrecy::SecretString;
/// # fn main() -> Result<(), aos_sw_api::Error> {
/// let config = SwitchConfig::new(
///     DeviceEndpoint::new("10.0.0.1", 7),
///     Credentials::new("manager", SecretString::from("secret".to_owned())),
/// );
/// let vlans = Client::new(&config)?.scope(|client| client.vlan.list().send())?;
/// # Ok(())
/// # }
/// ```
pub struct Client<T: BlockingTransport = HttpTransport> {
    handle: Arc<TransportHandle<T>>,
    auth: Authenticator<T>,
    resources: Resources<T>,
    auto_logout: bool,
    state: SessionState,
}

impl Client<HttpTransport> {
    /// Build a client over `reqwest::blocking`. Nothing is sent yet.
    pub fn new(config: &SwitchConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config.http_settings())?;
        Self::with_transport(transport, config)
    }
}

impl<T: BlockingTransport> Client<T> {
    /// Build a client over any blocking transport.
    pub fn with_transport(transport: T, config: &SwitchConfig) -> Result<Self, Error> {
        let base_url = config.endpoint.base_url()?;
        debug!(%base_url, "building blocking switch client");

        let handle = Arc::new(TransportHandle::new(transport, base_url));
        let auth = Authenticator::new(Arc::clone(&handle), config.credentials.clone());
        let resources = Resources::new(&handle);

        Ok(Self {
            handle,
            auth,
            resources,
            auto_logout: config.auto_logout,
            state: SessionState::Unauthenticated,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn base_url(&self) -> &Url {
        self.handle.base_url()
    }

    /// The attached session, e.g. to persist its cookie for later reuse.
    pub fn session(&self) -> Option<AuthContext> {
        self.handle.session()
    }

    /// Log in.
    ///
    /// On failure the connection is released and the client stays
    /// `Unauthenticated`; it cannot be entered again.
    pub fn enter(&mut self) -> Result<(), Error> {
        match self.state {
            SessionState::Authenticated => return Err(Error::SessionActive),
            SessionState::Closed => return Err(Error::Closed),
            SessionState::Unauthenticated if self.handle.is_released() => {
                return Err(Error::Closed);
            }
            SessionState::Unauthenticated => {}
        }

        match self.auth.login().send() {
            Ok(_) => {
                self.state = SessionState::Authenticated;
                info!(base_url = %self.handle.base_url(), "session opened");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "login failed, releasing connection");
                self.handle.close();
                Err(e)
            }
        }
    }

    /// Log out (when auto-logout is on) and release the connection.
    ///
    /// The connection is released even when logout fails; the logout error
    /// is still returned. Calling `exit` on a closed client does nothing.
    pub fn exit(&mut self) -> Result<(), Error> {
        if self.state == SessionState::Closed {
            return Ok(());
        }

        let logout = if self.auto_logout {
            self.auth.logout().send()
        } else {
            debug!("auto-logout disabled, leaving session open on the switch");
            Ok(())
        };
        if let Err(ref e) = logout {
            warn!(error = %e, "logout failed, releasing connection anyway");
        }

        self.handle.detach();
        self.handle.close();
        self.state = SessionState::Closed;
        info!("session closed");
        logout
    }

    /// Release the connection without logging out.
    ///
    /// For callers managing the lifecycle themselves. The session stays
    /// valid on the switch until it times out.
    pub fn close_session(&mut self) {
        self.handle.close();
        self.state = SessionState::Closed;
    }

    /// Log in, run `f`, then log out and release the connection.
    ///
    /// Teardown runs whether `f` succeeds or fails. A logout failure is
    /// only logged: the value of a successful `f` is returned, and an error
    /// from `f` is returned as is. Use [`Client::exit`] directly to observe
    /// the logout result. On panic the connection is released by drop,
    /// without logout.
    pub fn scope<R, E, F>(mut self, f: F) -> Result<R, E>
    where
        F: FnOnce(&Self) -> Result<R, E>,
        E: From<Error>,
    {
        self.enter()?;
        let outcome = f(&self);
        // exit() already warns on a failed logout
        let _ = self.exit();
        outcome
    }
}

impl<T: BlockingTransport> Deref for Client<T> {
    type Target = Resources<T>;

    fn deref(&self) -> &Self::Target {
        &self.resources
    }
}
