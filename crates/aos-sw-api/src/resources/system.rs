use std::sync::Arc;

use serde::Serialize;

use crate::call::{self, Call};
use crate::models::{SystemInfo, SystemStatus};
use crate::transport::{Transport, TransportHandle};

/// `/system`: device identity and status.
pub struct SystemClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> SystemClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn get(&self) -> Call<'_, T, SystemInfo> {
        call::get(self.handle.as_ref(), "system")
    }

    /// Change name, location or contact.
    pub fn update(&self, changes: &impl Serialize) -> Call<'_, T, SystemInfo> {
        call::put(self.handle.as_ref(), "system", changes)
    }

    /// Model, serial number and firmware version.
    pub fn status(&self) -> Call<'_, T, SystemStatus> {
        call::get(self.handle.as_ref(), "system/status")
    }
}
