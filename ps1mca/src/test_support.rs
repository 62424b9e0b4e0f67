//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport session setup and canned adaptor
//! replies so tests across the crate and the tests/ directory can reuse the
//! same byte layouts.
#![allow(dead_code)]

use crate::card::{Session, SessionConfig};
use crate::constants::{MEB_GOOD, READ_LEN, WRITE_END_OFFSET, WRITE_LEN};
use crate::protocol::checksum::frame_checksum;
use crate::transport::mock::MockTransport;
use crate::transport::Transport;
use crate::types::FrameAddress;

use std::cell::RefCell;
use std::rc::Rc;

/// Session config suited to tests: short timeout, no inter-frame delay.
#[doc(hidden)]
pub fn test_config() -> SessionConfig {
    SessionConfig {
        timeout_ms: 1000,
        write_delay_ms: 0,
    }
}

/// Build a Session over a MockTransport pre-seeded with the given replies.
#[doc(hidden)]
pub fn mock_session(replies: Vec<Vec<u8>>) -> Session {
    let mut mock = MockTransport::new();
    for reply in replies {
        mock.push_response(reply);
    }
    Session::with_config(Box::new(mock), test_config())
}

/// Transport wrapper delegating into a shared MockTransport, so a test can
/// keep inspecting the sent log after the Session has taken ownership.
#[doc(hidden)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl Transport for SharedTransport {
    fn send(&mut self, data: &[u8]) -> crate::Result<()> {
        self.inner.borrow_mut().send(data)
    }

    fn receive(&mut self, timeout_ms: u64) -> crate::Result<Vec<u8>> {
        self.inner.borrow_mut().receive(timeout_ms)
    }
}

/// Build a Session around a shared MockTransport and hand back the shared
/// handle for assertions on `sent`.
#[doc(hidden)]
pub fn shared_mock_session(replies: Vec<Vec<u8>>) -> (Session, Rc<RefCell<MockTransport>>) {
    let mut mock = MockTransport::new();
    for reply in replies {
        mock.push_response(reply);
    }
    let shared = Rc::new(RefCell::new(mock));
    let session = Session::with_config(
        Box::new(SharedTransport {
            inner: shared.clone(),
        }),
        test_config(),
    );
    (session, shared)
}

/// A fully consistent 144-byte read reply for `address`, data filled with
/// `fill`.
#[doc(hidden)]
pub fn good_read_reply(address: FrameAddress, fill: u8) -> Vec<u8> {
    read_reply_with_data(address, &[fill; 128])
}

/// A 144-byte read reply carrying the given frame data, checksum and end
/// byte consistent.
#[doc(hidden)]
pub fn read_reply_with_data(address: FrameAddress, data: &[u8; 128]) -> Vec<u8> {
    let mut buf = vec![0u8; READ_LEN];
    buf[0] = 0x55;
    buf[1] = 0x5a;
    buf[10] = 0x5c;
    buf[11] = 0x5d;
    buf[12] = address.msb();
    buf[13] = address.lsb();
    buf[14..142].copy_from_slice(data);
    buf[142] = frame_checksum(address.msb(), address.lsb(), data);
    buf[143] = MEB_GOOD;
    buf
}

/// A 142-byte write reply with the given Memory End Byte.
#[doc(hidden)]
pub fn write_reply(end_byte: u8) -> Vec<u8> {
    let mut buf = vec![0u8; WRITE_LEN];
    buf[0] = 0x55;
    buf[1] = 0x5a;
    buf[WRITE_END_OFFSET] = end_byte;
    buf
}

/// A 64-byte get-id reply with the given signature window.
#[doc(hidden)]
pub fn id_reply_with_signature(signature: [u8; 8]) -> Vec<u8> {
    let mut buf = vec![0u8; 64];
    buf[0] = 0x55;
    buf[1] = 0x5a;
    buf[6..14].copy_from_slice(&signature);
    buf
}

/// A PocketStation get-id reply with the given directory index and serial.
#[doc(hidden)]
pub fn pocketstation_reply(directory_index: u16, serial: [u8; 4]) -> Vec<u8> {
    let mut buf = vec![0u8; 32];
    buf[0] = 0x55;
    buf[1] = 0x5a;
    buf[6..8].copy_from_slice(&directory_index.to_le_bytes());
    buf[12..16].copy_from_slice(&serial);
    buf
}
