// Shared fixtures: an in-memory switch that records every request.
#![allow(dead_code, clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use aos_sw_api::{
    AsyncTransport, BlockingTransport, Credentials, DeviceEndpoint, Error, Request, Response,
    SwitchConfig, Transport,
};
use reqwest::{Method, StatusCode};
use secrecy::SecretString;

pub const SESSION_COOKIE: &str = "sessionId=fake-session";

/// What the fake switch answers to one route.
#[derive(Debug, Clone)]
pub enum Reply {
    Status(u16, String),
    ConnectionError,
}

impl Reply {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self::Status(status, body.to_string())
    }
}

#[derive(Default)]
struct State {
    requests: Vec<Request>,
    closes: usize,
    routes: Vec<(Method, String, Reply)>,
}

/// Cloneable fake transport; clones share the same recorded state so a
/// test can keep one after handing the other to a client.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<State>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the answer for `method path` (path relative to `/rest/v7/`).
    pub fn on(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.state
            .lock()
            .unwrap()
            .routes
            .push((method, path.to_owned(), reply));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }

    /// `(method, relative path)` of every request, in order.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests()
            .iter()
            .map(|r| (r.method.clone(), relative_path(r)))
            .collect()
    }

    pub fn closes(&self) -> usize {
        self.state.lock().unwrap().closes
    }

    fn respond(&self, request: Request) -> Result<Response, Error> {
        let mut state = self.state.lock().unwrap();
        let path = relative_path(&request);
        let method = request.method.clone();
        state.requests.push(request);

        let reply = state
            .routes
            .iter()
            .rev()
            .find(|(m, p, _)| *m == method && *p == path)
            .map(|(_, _, reply)| reply.clone())
            .unwrap_or_else(|| default_reply(&method, &path));

        match reply {
            Reply::Status(status, body) => {
                Ok(Response::new(StatusCode::from_u16(status).unwrap(), body))
            }
            Reply::ConnectionError => Err(Error::Connection("connection reset by peer".into())),
        }
    }
}

fn default_reply(method: &Method, path: &str) -> Reply {
    match (method.as_str(), path) {
        ("POST", "login-sessions") => Reply::json(
            201,
            serde_json::json!({ "uri": "/login-sessions", "cookie": SESSION_COOKIE }),
        ),
        ("DELETE", _) => Reply::Status(204, String::new()),
        _ => Reply::Status(200, "{}".into()),
    }
}

fn relative_path(request: &Request) -> String {
    request
        .url
        .path()
        .trim_start_matches("/rest/v7/")
        .to_owned()
}

impl Transport for FakeTransport {
    fn close(&self) {
        self.state.lock().unwrap().closes += 1;
    }
}

impl BlockingTransport for FakeTransport {
    fn execute(&self, request: Request) -> Result<Response, Error> {
        self.respond(request)
    }
}

impl AsyncTransport for FakeTransport {
    async fn execute(&self, request: Request) -> Result<Response, Error> {
        self.respond(request)
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("manager", SecretString::from("secret".to_owned()))
}

/// `10.0.0.1`, API v7, HTTPS, auto-logout on.
pub fn config() -> SwitchConfig {
    SwitchConfig::new(DeviceEndpoint::new("10.0.0.1", 7), credentials())
}
