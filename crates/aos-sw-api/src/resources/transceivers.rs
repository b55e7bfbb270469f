use std::sync::Arc;

use crate::call::{self, Call, segment};
use crate::models::{Transceiver, TransceiverCollection};
use crate::transport::{Transport, TransportHandle};

/// `/transceivers`: installed optics.
pub struct TransceiverClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> TransceiverClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    pub fn list(&self) -> Call<'_, T, TransceiverCollection> {
        call::get(self.handle.as_ref(), "transceivers")
    }

    pub fn get(&self, port_id: &str) -> Call<'_, T, Transceiver> {
        call::get(self.handle.as_ref(), format!("transceivers/{}", segment(port_id)))
    }
}
