// aos-sw-api: Rust client for the ArubaOS-Switch REST API (blocking + async)

pub mod auth;
pub mod call;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod models;
pub mod resources;
pub mod transport;

mod async_client;
mod client;
mod registry;

pub use async_client::AsyncClient;
pub use auth::{AuthContext, Authenticator, Credentials};
pub use call::Call;
pub use client::Client;
pub use config::{SessionState, SwitchConfig};
pub use endpoint::{DeviceEndpoint, Scheme, TlsVerification};
pub use error::Error;
pub use http::{AsyncHttpTransport, HttpSettings, HttpTransport};
pub use registry::Resources;
pub use transport::{
    AsyncTransport, BlockingTransport, Request, Response, Transport, TransportHandle,
};
