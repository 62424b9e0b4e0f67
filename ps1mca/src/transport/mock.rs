// ps1mca/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent buffers and returns queued
/// responses; a drained queue behaves like a device that stopped answering.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every buffer handed to `send`, in order.
    pub sent: Vec<Vec<u8>>,
    /// Queued replies, consumed front to back.
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of receive calls that should fail with Timeout
    /// before the queue is consulted again.
    pub receive_failures: usize,
}

impl MockTransport {
    /// Fresh mock with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one reply.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Set how many subsequent receive calls should fail (for tests).
    pub fn set_receive_failures(&mut self, n: usize) {
        self.receive_failures = n;
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, _timeout_ms: u64) -> Result<Vec<u8>> {
        if self.receive_failures > 0 {
            self.receive_failures -= 1;
            return Err(Error::Timeout);
        }
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }
}
