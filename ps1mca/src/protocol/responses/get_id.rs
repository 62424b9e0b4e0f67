// ps1mca/src/protocol/responses/get_id.rs

use crate::constants::ID_SIGNATURE_OFFSET;
use crate::protocol::parser;
use crate::Result;

/// Parsed get-id reply.
///
/// Only the adaptor layer is validated here; interpreting the signature
/// window is the identity classifier's job, because a mismatch is a
/// classification result, not an error.
#[derive(Debug, Clone)]
pub struct IdResponse {
    raw: Vec<u8>,
}

impl IdResponse {
    /// Parse a get-id reply. Requires the adaptor acknowledge and a
    /// successful command status; authentication failure surfaces as
    /// [`Error::AuthenticationFailed`](crate::Error::AuthenticationFailed).
    pub fn parse(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, ID_SIGNATURE_OFFSET + 8)?;
        parser::check_adaptor_status(data)?;
        parser::check_command_status(data)?;
        Ok(Self { raw: data.to_vec() })
    }

    /// The 8-byte signature window: ID1, ID2, ack1, ack2, frame count pair,
    /// frame size pair.
    pub fn signature(&self) -> [u8; 8] {
        let mut sig = [0u8; 8];
        sig.copy_from_slice(&self.raw[ID_SIGNATURE_OFFSET..ID_SIGNATURE_OFFSET + 8]);
        sig
    }

    /// Frame count the card reports (0x0400 = 1024 on an original card).
    pub fn reported_frame_count(&self) -> u16 {
        u16::from_be_bytes([self.raw[ID_SIGNATURE_OFFSET + 4], self.raw[ID_SIGNATURE_OFFSET + 5]])
    }

    /// Frame size the card reports (0x0080 = 128 on an original card).
    pub fn reported_frame_size(&self) -> u16 {
        u16::from_be_bytes([self.raw[ID_SIGNATURE_OFFSET + 6], self.raw[ID_SIGNATURE_OFFSET + 7]])
    }

    /// The whole raw reply, for logging.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}
