use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call, segment};
use crate::models::{PortPoe, PortPoeCollection};
use crate::transport::{Transport, TransportHandle};

/// Power over Ethernet, per port.
pub struct PoeClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> PoeClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    /// `GET poe/ports`
    pub fn list(&self) -> Call<'_, T, PortPoeCollection> {
        call::get(self.handle.as_ref(), "poe/ports")
    }

    /// `GET ports/{id}/poe`
    pub fn get(&self, port_id: &str) -> Call<'_, T, PortPoe> {
        call::get(self.handle.as_ref(), format!("ports/{}/poe", segment(port_id)))
    }

    /// `PUT ports/{id}/poe`
    pub fn update(&self, port_id: &str, changes: &impl Serialize) -> Call<'_, T, PortPoe> {
        call::put(self.handle.as_ref(), format!("ports/{}/poe", segment(port_id)), changes)
    }

    /// `GET ports/{id}/poe/stats`: live power draw and class.
    pub fn stats(&self, port_id: &str) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), format!("ports/{}/poe/stats", segment(port_id)))
    }
}
