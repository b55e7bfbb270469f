use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call, segment};
use crate::transport::{Transport, TransportHandle};

/// SNMPv3 engine settings and users.
pub struct Snmpv3Client<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> Snmpv3Client<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn get(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "snmpv3")
    }

    pub fn update(&self, settings: &impl Serialize) -> Call<'_, T, Value> {
        call::put(self.handle.as_ref(), "snmpv3", settings)
    }

    pub fn users(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "snmpv3/users")
    }

    pub fn create_user(&self, user: &impl Serialize) -> Call<'_, T, Value> {
        call::post(self.handle.as_ref(), "snmpv3/users", user)
    }

    pub fn delete_user(&self, name: &str) -> Call<'_, T, ()> {
        call::delete(self.handle.as_ref(), format!("snmpv3/users/{}", segment(name)))
    }
}
