// Async session facade.
//
// Same lifecycle as the blocking `Client`, driven with `.await` on a tokio
// runtime. The two facades own different transport types, so one handle
// can never be shared between scheduling models.

use std::ops::Deref;
use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::auth::{AuthContext, Authenticator};
use crate::config::{SessionState, SwitchConfig};
use crate::error::Error;
use crate::http::AsyncHttpTransport;
use crate::registry::Resources;
use crate::transport::{AsyncTransport, TransportHandle};

/// Async client for one switch.
///
/// ```no_run
/// # use aos_sw_api::{AsyncClient, Credentials, DeviceEndpoint, SwitchConfig};
/// # use secrecy::SecretString;
/// # async fn run() -> Result<(), aos_sw_api::Error> {
/// let config = SwitchConfig::new(
///     DeviceEndpoint::new("10.0.0.1", 7),
///     Credentials::new("manager", SecretString::from("secret".to_owned())),
/// );
/// let status = AsyncClient::new(&config)?
///     .scope(async |client| client.system.status().await)
///     .await?;
/// println!("{}", status.name);
/// # Ok(())
/// # }
/// ```
pub struct AsyncClient<T: AsyncTransport = AsyncHttpTransport> {
    handle: Arc<TransportHandle<T>>,
    auth: Authenticator<T>,
    resources: Resources<T>,
    auto_logout: bool,
    state: SessionState,
}

impl AsyncClient<AsyncHttpTransport> {
    /// Build a client over async `reqwest`. Nothing is sent yet.
    pub fn new(config: &SwitchConfig) -> Result<Self, Error> {
        let transport = AsyncHttpTransport::new(&config.http_settings())?;
        Self::with_transport(transport, config)
    }
}

impl<T: AsyncTransport> AsyncClient<T> {
    /// Build a client over any async transport.
    pub fn with_transport(transport: T, config: &SwitchConfig) -> Result<Self, Error> {
        let base_url = config.endpoint.base_url()?;
        debug!(%base_url, "building async switch client");

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

    pub fn session(&self) -> Option<AuthContext> {
        self.handle.session()
    }

    /// Log in. See [`Client::enter`](crate::Client::enter).
    pub async fn enter(&mut self) -> Result<(), Error> {
        match self.state {
            SessionState::Authenticated => return Err(Error::SessionActive),
            SessionState::Closed => return Err(Error::Closed),
            SessionState::Unauthenticated if self.handle.is_released() => {
                return Err(Error::Closed);
            }
            SessionState::Unauthenticated => {}
        }

        match self.auth.login().await {
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
    /// See [`Client::exit`](crate::Client::exit).
    pub async fn exit(&mut self) -> Result<(), Error> {
        if self.state == SessionState::Closed {
            return Ok(());
        }

        let logout = if self.auto_logout {
            self.auth.logout().await
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
    pub fn close_session(&mut self) {
        self.handle.close();
        self.state = SessionState::Closed;
    }

    /// Log in, await `f`, then log out and release the connection.
    ///
    /// Logout failures are handled as in [`Client::scope`](crate::Client::scope).
    /// If the returned future is dropped mid-flight the connection is
    /// released by drop, without logout.
    pub async fn scope<R, E, F>(mut self, f: F) -> Result<R, E>
    where
        F: AsyncFnOnce(&Self) -> Result<R, E>,
        E: From<Error>,
    {
        self.enter().await?;
        let outcome = f(&self).await;
        // exit() already warns on a failed logout
        let _ = self.exit().await;
        outcome
    }
}

impl<T: AsyncTransport> Deref for AsyncClient<T> {
    type Target = Resources<T>;

    fn deref(&self) -> &Self::Target {
        &self.resources
    }
}
