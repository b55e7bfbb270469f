use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call, segment};
use crate::transport::{Transport, TransportHandle};

/// 802.1X port-based authentication.
pub struct Dot1xClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> Dot1xClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    /// Global 802.1X settings.
    pub fn get(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "dot1x")
    }

    pub fn update(&self, settings: &impl Serialize) -> Call<'_, T, Value> {
        call::put(self.handle.as_ref(), "dot1x", settings)
    }

    /// Authenticator settings of every port.
    pub fn authenticators(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "dot1x/authenticator")
    }

    pub fn get_authenticator(&self, port_id: &str) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), format!("dot1x/authenticator/{}", segment(port_id)))
    }

    pub fn update_authenticator(
        &self,
        port_id: &str,
        settings: &impl Serialize,
    ) -> Call<'_, T, Value> {
        call::put(
            self.handle.as_ref(),
            format!("dot1x/authenticator/{}", segment(port_id)),
            settings,
        )
    }
}
