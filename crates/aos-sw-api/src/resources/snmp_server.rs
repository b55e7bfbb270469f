use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call, segment};
use crate::transport::{Transport, TransportHandle};

/// SNMPv1/v2c communities.
pub struct SnmpServerClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> SnmpServerClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn communities(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "snmp-server/communities")
    }

    pub fn get_community(&self, name: &str) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), format!("snmp-server/communities/{}", segment(name)))
    }

    pub fn create_community(&self, community: &impl Serialize) -> Call<'_, T, Value> {
        call::post(self.handle.as_ref(), "snmp-server/communities", community)
    }

    pub fn update_community(&self, name: &str, changes: &impl Serialize) -> Call<'_, T, Value> {
        call::put(
            self.handle.as_ref(),
            format!("snmp-server/communities/{}", segment(name)),
            changes,
        )
    }

    pub fn delete_community(&self, name: &str) -> Call<'_, T, ()> {
        call::delete(self.handle.as_ref(), format!("snmp-server/communities/{}", segment(name)))
    }
}
