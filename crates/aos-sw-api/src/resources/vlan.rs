use std::sync::Arc;

use serde::Serialize;

use crate::call::{self, Call};
use crate::models::{Vlan, VlanCollection};
use crate::transport::{Transport, TransportHandle};

/// `/vlans`: VLAN definitions.
pub struct VlanClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> VlanClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    /// `GET vlans`
    pub fn list(&self) -> Call<'_, T, VlanCollection> {
        call::get(self.handle.as_ref(), "vlans")
    }

    /// `GET vlans/{id}`
    pub fn get(&self, vlan_id: u16) -> Call<'_, T, Vlan> {
        call::get(self.handle.as_ref(), format!("vlans/{vlan_id}"))
    }

    /// `POST vlans`. The switch answers with the created VLAN.
    pub fn create(&self, vlan: &Vlan) -> Call<'_, T, Vlan> {
        call::post(self.handle.as_ref(), "vlans", vlan)
    }

    /// `PUT vlans/{id}` with a partial or full VLAN body.
    pub fn update(&self, vlan_id: u16, changes: &impl Serialize) -> Call<'_, T, Vlan> {
        call::put(self.handle.as_ref(), format!("vlans/{vlan_id}"), changes)
    }

    /// `DELETE vlans/{id}`
    pub fn delete(&self, vlan_id: u16) -> Call<'_, T, ()> {
        call::delete(self.handle.as_ref(), format!("vlans/{vlan_id}"))
    }
}
