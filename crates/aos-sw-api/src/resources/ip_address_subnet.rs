use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call, segment};
use crate::transport::{Transport, TransportHandle};

/// IPv4 addresses bound to VLAN interfaces.
pub struct IpAddressSubnetClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> IpAddressSubnetClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    /// Every address on the switch (`GET ipaddresses`).
    pub fn list(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "ipaddresses")
    }

    pub fn for_vlan(&self, vlan_id: u16) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), format!("vlans/{vlan_id}/ipaddresses"))
    }

    /// Add an address to a VLAN. The body carries `ip_address_mode`,
    /// `ip_address` and `ip_mask`.
    pub fn create(&self, vlan_id: u16, subnet: &impl Serialize) -> Call<'_, T, Value> {
        call::post(
            self.handle.as_ref(),
            format!("vlans/{vlan_id}/ipaddresses"),
            subnet,
        )
    }

    /// `DELETE vlans/{id}/ipaddresses/{ip}-{mask}`
    pub fn delete(&self, vlan_id: u16, ip_address: &str, ip_mask: &str) -> Call<'_, T, ()> {
        call::delete(
            self.handle.as_ref(),
            format!(
                "vlans/{vlan_id}/ipaddresses/{}-{}",
                segment(ip_address),
                segment(ip_mask)
            ),
        )
    }
}
