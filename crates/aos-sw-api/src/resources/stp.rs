use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call, segment};
use crate::transport::{Transport, TransportHandle};

/// Spanning tree, global and per port.
pub struct StpClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> StpClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn get(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "stp")
    }

    pub fn update(&self, settings: &impl Serialize) -> Call<'_, T, Value> {
        call::put(self.handle.as_ref(), "stp", settings)
    }

    pub fn ports(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "stp/ports")
    }

    pub fn get_port(&self, port_id: &str) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), format!("stp/ports/{}", segment(port_id)))
    }

    pub fn update_port(&self, port_id: &str, settings: &impl Serialize) -> Call<'_, T, Value> {
        call::put(self.handle.as_ref(), format!("stp/ports/{}", segment(port_id)), settings)
    }
}
