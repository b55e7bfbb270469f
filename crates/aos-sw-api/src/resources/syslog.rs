use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call, segment};
use crate::transport::{Transport, TransportHandle};

/// Remote syslog servers, addressed by IP.
pub struct SyslogClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> SyslogClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn servers(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "syslog/servers")
    }

    pub fn get_server(&self, ip_address: &str) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), format!("syslog/servers/{}", segment(ip_address)))
    }

    pub fn create_server(&self, server: &impl Serialize) -> Call<'_, T, Value> {
        call::post(self.handle.as_ref(), "syslog/servers", server)
    }

    pub fn update_server(&self, ip_address: &str, changes: &impl Serialize) -> Call<'_, T, Value> {
        call::put(
            self.handle.as_ref(),
            format!("syslog/servers/{}", segment(ip_address)),
            changes,
        )
    }

    pub fn delete_server(&self, ip_address: &str) -> Call<'_, T, ()> {
        call::delete(self.handle.as_ref(), format!("syslog/servers/{}", segment(ip_address)))
    }
}
