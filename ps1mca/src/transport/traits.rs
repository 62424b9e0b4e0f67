// ps1mca/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts I/O away from protocol/session logic.
///
/// The adaptor protocol is strictly half-duplex: one command goes out, one
/// reply comes back. Implementations only need the two bulk operations.
pub trait Transport {
    /// Send raw bytes to the adaptor.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive raw bytes from the adaptor with a timeout in milliseconds.
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;
}
