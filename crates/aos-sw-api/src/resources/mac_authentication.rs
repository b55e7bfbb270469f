use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call, segment};
use crate::transport::{Transport, TransportHandle};

/// MAC-based authentication, global and per port.
pub struct MacAuthenticationClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> MacAuthenticationClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn get(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "mac-authentication")
    }

    pub fn update(&self, settings: &impl Serialize) -> Call<'_, T, Value> {
        call::put(self.handle.as_ref(), "mac-authentication", settings)
    }

    pub fn ports(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "mac-authentication/port")
    }

    pub fn get_port(&self, port_id: &str) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), format!("mac-authentication/port/{}", segment(port_id)))
    }

    pub fn update_port(&self, port_id: &str, settings: &impl Serialize) -> Call<'_, T, Value> {
        call::put(
            self.handle.as_ref(),
            format!("mac-authentication/port/{}", segment(port_id)),
            settings,
        )
    }
}
