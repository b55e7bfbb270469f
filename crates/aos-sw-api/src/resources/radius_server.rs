use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call};
use crate::transport::{Transport, TransportHandle};

/// `/radius_servers`: RADIUS server entries, addressed by numeric id.
pub struct RadiusServerClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> RadiusServerClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn list(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "radius_servers")
    }

    pub fn get(&self, server_id: u32) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), format!("radius_servers/{server_id}"))
    }

    pub fn create(&self, server: &impl Serialize) -> Call<'_, T, Value> {
        call::post(self.handle.as_ref(), "radius_servers", server)
    }

    pub fn update(&self, server_id: u32, changes: &impl Serialize) -> Call<'_, T, Value> {
        call::put(
            self.handle.as_ref(),
            format!("radius_servers/{server_id}"),
            changes,
        )
    }

    pub fn delete(&self, server_id: u32) -> Call<'_, T, ()> {
        call::delete(self.handle.as_ref(), format!("radius_servers/{server_id}"))
    }
}
