use std::sync::Arc;

use crate::call::{self, Call, segment};
use crate::models::MacTable;
use crate::transport::{Transport, TransportHandle};

/// Learned MAC addresses, whole table or filtered by VLAN or port.
pub struct MacTableClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> MacTableClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn list(&self) -> Call<'_, T, MacTable> {
        call::get(self.handle.as_ref(), "mac-table")
    }

    pub fn for_vlan(&self, vlan_id: u16) -> Call<'_, T, MacTable> {
        call::get(self.handle.as_ref(), format!("vlans/{vlan_id}/mac-table"))
    }

    pub fn for_port(&self, port_id: &str) -> Call<'_, T, MacTable> {
        call::get(self.handle.as_ref(), format!("ports/{}/mac-table", segment(port_id)))
    }
}
