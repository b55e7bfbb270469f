use std::sync::Arc;

use crate::call::{self, Call, segment};
use crate::models::{VlanPort, VlanPortCollection};
use crate::transport::{Transport, TransportHandle};

/// `/vlans-ports`: port membership in VLANs.
///
/// A membership is addressed as `{vlan_id}-{port_id}`.
pub struct VlanPortClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> VlanPortClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn list(&self) -> Call<'_, T, VlanPortCollection> {
        call::get(self.handle.as_ref(), "vlans-ports")
    }

    pub fn get(&self, vlan_id: u16, port_id: &str) -> Call<'_, T, VlanPort> {
        call::get(self.handle.as_ref(), membership_path(vlan_id, port_id))
    }

    /// Add a port to a VLAN, or change its tagging mode.
    pub fn create(&self, membership: &VlanPort) -> Call<'_, T, VlanPort> {
        call::post(self.handle.as_ref(), "vlans-ports", membership)
    }

    pub fn delete(&self, vlan_id: u16, port_id: &str) -> Call<'_, T, ()> {
        call::delete(self.handle.as_ref(), membership_path(vlan_id, port_id))
    }
}

fn membership_path(vlan_id: u16, port_id: &str) -> String {
    format!("vlans-ports/{vlan_id}-{}", segment(port_id))
}
