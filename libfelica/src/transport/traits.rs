// libfelica/src/transport/traits.rs

use crate::error::TransportError;

/// Transport trait abstracts the reader/host tag session away from the
/// packet codec.
///
/// One call sends one complete command packet and returns the complete
/// response packet the card answered with.
pub trait Transport {
    /// Send `request` and wait up to `timeout_ms` for the reply.
    fn transceive(&mut self, request: &[u8], timeout_ms: u64) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transceive(&mut self, request: &[u8], timeout_ms: u64) -> Result<Vec<u8>, TransportError> {
        (**self).transceive(request, timeout_ms)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn transceive(&mut self, request: &[u8], timeout_ms: u64) -> Result<Vec<u8>, TransportError> {
        (**self).transceive(request, timeout_ms)
    }
}
