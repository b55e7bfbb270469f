use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call, segment};
use crate::models::{Port, PortCollection};
use crate::transport::{Transport, TransportHandle};

/// `/ports`: physical port configuration and statistics.
pub struct PortClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> PortClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn list(&self) -> Call<'_, T, PortCollection> {
        call::get(self.handle.as_ref(), "ports")
    }

    pub fn get(&self, port_id: &str) -> Call<'_, T, Port> {
        call::get(self.handle.as_ref(), format!("ports/{}", segment(port_id)))
    }

    /// `PUT ports/{id}`, e.g. `{"is_port_enabled": false}`.
    pub fn update(&self, port_id: &str, changes: &impl Serialize) -> Call<'_, T, Port> {
        call::put(self.handle.as_ref(), format!("ports/{}", segment(port_id)), changes)
    }

    /// Counters for every port (`GET port-statistics`).
    pub fn statistics(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "port-statistics")
    }

    pub fn port_statistics(&self, port_id: &str) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), format!("port-statistics/{}", segment(port_id)))
    }
}
