use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call, segment};
use crate::transport::{Transport, TransportHandle};

/// `/authentication`: management access methods (local, RADIUS, TACACS+)
/// per login channel.
pub struct AuthenticationClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> AuthenticationClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn get(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "authentication")
    }

    pub fn update(&self, settings: &impl Serialize) -> Call<'_, T, Value> {
        call::put(self.handle.as_ref(), "authentication", settings)
    }

    /// Methods for one channel, e.g. `ssh`, `console` or `web`.
    pub fn get_channel(&self, channel: &str) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), format!("authentication/{}", segment(channel)))
    }

    pub fn update_channel(&self, channel: &str, settings: &impl Serialize) -> Call<'_, T, Value> {
        call::put(self.handle.as_ref(), format!("authentication/{}", segment(channel)), settings)
    }
}
