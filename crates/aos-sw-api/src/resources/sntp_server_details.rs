use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call, segment};
use crate::transport::{Transport, TransportHandle};

/// `/system/sntp_server`: the configured SNTP servers.
pub struct SntpServerDetailsClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> SntpServerDetailsClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn list(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "system/sntp_server")
    }

    /// Add a server; the body names `sntp_server_address` and priority.
    pub fn create(&self, server: &impl Serialize) -> Call<'_, T, Value> {
        call::post(self.handle.as_ref(), "system/sntp_server", server)
    }

    /// `DELETE system/sntp_server/{priority}-{address}`
    pub fn delete(&self, priority: u8, address: &str) -> Call<'_, T, ()> {
        call::delete(
            self.handle.as_ref(),
            format!("system/sntp_server/{priority}-{}", segment(address)),
        )
    }
}
