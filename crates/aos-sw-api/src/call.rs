// Pending switch calls.
//
// Resource and auth operations are written once, independent of scheduling.
// Each returns a `Call` describing the exchange; the blocking side runs it
// with `.send()`, the async side with `.await`. Both paths go through the
// same prepare -> execute -> finish steps on the shared handle.

use std::borrow::Cow;
use std::future::{Future, IntoFuture};
use std::pin::Pin;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Error;
use crate::transport::{AsyncTransport, BlockingTransport, Response, Transport, TransportHandle};

/// Whether a request needs the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    /// Must carry the session cookie; refused locally without one.
    Session,
    /// Sent without a cookie (login).
    Anonymous,
}

/// A request before it is bound to the handle's base URL and session.
#[derive(Debug)]
pub(crate) struct Draft {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) access: Access,
}

impl Draft {
    pub(crate) fn session(
        method: Method,
        path: impl Into<String>,
        body: Option<serde_json::Value>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            access: Access::Session,
        }
    }

    pub(crate) fn anonymous(
        method: Method,
        path: impl Into<String>,
        body: Option<serde_json::Value>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            access: Access::Anonymous,
        }
    }
}

/// Turns the transport outcome into the call's result. Also sees
/// transport and preparation errors, so it can retype them.
pub(crate) type Finish<T, R> = fn(&TransportHandle<T>, Result<Response, Error>) -> Result<R, Error>;

enum Plan<T: Transport, R> {
    /// Resolved locally, nothing to send.
    Ready(Result<R, Error>),
    Exchange { draft: Draft, finish: Finish<T, R> },
}

/// One pending exchange with the switch.
///
/// Nothing is sent until the call is driven: `.send()` on a blocking
/// transport, `.await` on an async one.
#[must_use = "a call does nothing until it is sent or awaited"]
pub struct Call<'h, T: Transport, R> {
    handle: &'h TransportHandle<T>,
    plan: Plan<T, R>,
}

impl<'h, T: Transport, R> Call<'h, T, R> {
    pub(crate) fn ready(handle: &'h TransportHandle<T>, result: Result<R, Error>) -> Self {
        Self {
            handle,
            plan: Plan::Ready(result),
        }
    }

    pub(crate) fn exchange(handle: &'h TransportHandle<T>, draft: Draft, finish: Finish<T, R>) -> Self {
        Self {
            handle,
            plan: Plan::Exchange { draft, finish },
        }
    }
}

impl<T: BlockingTransport, R> Call<'_, T, R> {
    /// Run the exchange on the calling thread.
    pub fn send(self) -> Result<R, Error> {
        let Self { handle, plan } = self;
        match plan {
            Plan::Ready(result) => result,
            Plan::Exchange { draft, finish } => {
                let outcome = handle.prepare(draft).and_then(|request| {
                    debug!("{} {}", request.method, request.url);
                    BlockingTransport::execute(handle.transport(), request)
                });
                finish(handle, outcome)
            }
        }
    }
}

impl<'h, T, R> IntoFuture for Call<'h, T, R>
where
    T: AsyncTransport,
    R: Send + 'h,
{
    type Output = Result<R, Error>;
    type IntoFuture = Pin<Box<dyn Future<Output = Result<R, Error>> + Send + 'h>>;

    fn into_future(self) -> Self::IntoFuture {
        let Self { handle, plan } = self;
        Box::pin(async move {
            match plan {
                Plan::Ready(result) => result,
                Plan::Exchange { draft, finish } => {
                    let outcome = match handle.prepare(draft) {
                        Ok(request) => {
                            debug!("{} {}", request.method, request.url);
                            AsyncTransport::execute(handle.transport(), request).await
                        }
                        Err(e) => Err(e),
                    };
                    finish(handle, outcome)
                }
            }
        })
    }
}

// ── Resource call builders ──────────────────────────────────────────

/// `GET {path}`, JSON response.
pub(crate) fn get<T: Transport, R: DeserializeOwned>(
    handle: &TransportHandle<T>,
    path: impl Into<String>,
) -> Call<'_, T, R> {
    Call::exchange(
        handle,
        Draft::session(Method::GET, path, None),
        finish_json::<T, R>,
    )
}

/// `POST {path}` with a JSON body, JSON response.
pub(crate) fn post<'h, T: Transport, R: DeserializeOwned>(
    handle: &'h TransportHandle<T>,
    path: impl Into<String>,
    body: &impl Serialize,
) -> Call<'h, T, R> {
    with_body(handle, Method::POST, path, body, finish_json::<T, R>)
}

/// `PUT {path}` with a JSON body, JSON response.
pub(crate) fn put<'h, T: Transport, R: DeserializeOwned>(
    handle: &'h TransportHandle<T>,
    path: impl Into<String>,
    body: &impl Serialize,
) -> Call<'h, T, R> {
    with_body(handle, Method::PUT, path, body, finish_json::<T, R>)
}

/// `DELETE {path}`, body ignored.
pub(crate) fn delete<T: Transport>(
    handle: &TransportHandle<T>,
    path: impl Into<String>,
) -> Call<'_, T, ()> {
    Call::exchange(
        handle,
        Draft::session(Method::DELETE, path, None),
        finish_empty::<T>,
    )
}

fn with_body<'h, T: Transport, R>(
    handle: &'h TransportHandle<T>,
    method: Method,
    path: impl Into<String>,
    body: &impl Serialize,
    finish: Finish<T, R>,
) -> Call<'h, T, R> {
    match serde_json::to_value(body) {
        Ok(value) => Call::exchange(handle, Draft::session(method, path, Some(value)), finish),
        Err(e) => Call::ready(handle, Err(Error::Encode(e))),
    }
}

/// Non-2xx becomes [`Error::ResourceOperation`]; transport errors pass
/// through unchanged.
/// Percent-encode a caller-supplied id for use as one path segment, so
/// `1/1` or `a?b` cannot split the path or start a query.
pub(crate) fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}

pub(crate) fn check(outcome: Result<Response, Error>) -> Result<Response, Error> {
    let response = outcome?;
    if response.is_success() {
        Ok(response)
    } else {
        Err(Error::ResourceOperation {
            status: response.status.as_u16(),
            body: response.body,
        })
    }
}

fn finish_json<T: Transport, R: DeserializeOwned>(
    _handle: &TransportHandle<T>,
    outcome: Result<Response, Error>,
) -> Result<R, Error> {
    check(outcome)?.json()
}

fn finish_empty<T: Transport>(
    _handle: &TransportHandle<T>,
    outcome: Result<Response, Error>,
) -> Result<(), Error> {
    check(outcome).map(|_| ())
}
