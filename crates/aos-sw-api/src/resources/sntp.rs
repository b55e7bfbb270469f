use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::call::{self, Call};
use crate::transport::{Transport, TransportHandle};

/// `/system/sntp`: time synchronisation mode and poll interval.
pub struct SntpClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> SntpClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn get(&self) -> Call<'_, T, Value> {
        call::get(self.handle.as_ref(), "system/sntp")
    }

    pub fn update(&self, settings: &impl Serialize) -> Call<'_, T, Value> {
        call::put(self.handle.as_ref(), "system/sntp", settings)
    }
}
