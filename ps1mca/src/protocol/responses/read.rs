// ps1mca/src/protocol/responses/read.rs

use super::status_outcomes;
use crate::constants::{
    FRAME_SIZE, MEB_GOOD, READ_ACK_OFFSET, READ_CHECKSUM_OFFSET, READ_DATA_OFFSET,
    READ_ECHO_OFFSET, READ_END_OFFSET, READ_LEN, REPLY_ACK,
};
use crate::protocol::checksum::frame_checksum;
use crate::protocol::parser;
use crate::types::{FrameAddress, FrameData, TransferOutcome};
use crate::Result;

/// Raw fields of a 144-byte read reply.
#[derive(Debug, Clone)]
pub struct ReadFrameResponse {
    /// Adaptor status pair (bytes 0..2).
    pub status: [u8; 2],
    /// Command acknowledge pair (bytes 10..12).
    pub ack: [u8; 2],
    /// Echoed frame address (bytes 12..14).
    pub echo: [u8; 2],
    /// The 128 data bytes.
    pub data: FrameData,
    /// Checksum byte the card computed.
    pub checksum: u8,
    /// Memory End Byte; 0x47 for a good read.
    pub end_byte: u8,
}

impl ReadFrameResponse {
    /// Split a full-length read reply into its fields. Length is the only
    /// hard requirement here; every content check is run by [`outcomes`]
    /// so each failure can be recorded separately.
    ///
    /// [`outcomes`]: Self::outcomes
    pub fn parse(buf: &[u8]) -> Result<Self> {
        parser::exact_len(buf, READ_LEN)?;
        let mut data = [0u8; FRAME_SIZE];
        data.copy_from_slice(&buf[READ_DATA_OFFSET..READ_DATA_OFFSET + FRAME_SIZE]);
        Ok(Self {
            status: [buf[0], buf[1]],
            ack: [buf[READ_ACK_OFFSET], buf[READ_ACK_OFFSET + 1]],
            echo: [buf[READ_ECHO_OFFSET], buf[READ_ECHO_OFFSET + 1]],
            data: FrameData::from_bytes(data),
            checksum: buf[READ_CHECKSUM_OFFSET],
            end_byte: buf[READ_END_OFFSET],
        })
    }

    /// Run every check against the reply, in fixed order: adaptor status,
    /// acknowledge pair, address echo, checksum, end byte. Each failure is
    /// its own entry; a clean reply yields a single `Success`.
    ///
    /// The checksum is recomputed over the *echoed* address so it validates
    /// the internal consistency of the reply even when the echo itself is
    /// wrong (which is then reported separately).
    pub fn outcomes(&self, address: FrameAddress) -> Vec<TransferOutcome> {
        let mut out = Vec::new();

        status_outcomes(self.status, &mut out);

        if self.ack != REPLY_ACK {
            out.push(TransferOutcome::AckMismatch { actual: self.ack });
        }

        if self.echo != [address.msb(), address.lsb()] {
            out.push(TransferOutcome::AddressEchoMismatch {
                actual: u16::from_be_bytes(self.echo),
            });
        }

        let expected = frame_checksum(self.echo[0], self.echo[1], self.data.as_bytes());
        if self.checksum != expected {
            out.push(TransferOutcome::ChecksumMismatch {
                expected,
                actual: self.checksum,
            });
        }

        if self.end_byte != MEB_GOOD {
            out.push(TransferOutcome::UnexpectedEndByte {
                actual: self.end_byte,
            });
        }

        if out.is_empty() {
            out.push(TransferOutcome::Success);
        }
        out
    }
}

/// Salvage the 128-byte data window from a degraded (typically truncated)
/// reply, zero-padding what is missing, so the dump keeps its offsets.
pub fn data_window(buf: &[u8]) -> FrameData {
    let mut data = [0u8; FRAME_SIZE];
    if buf.len() > READ_DATA_OFFSET {
        let available = usize::min(buf.len() - READ_DATA_OFFSET, FRAME_SIZE);
        data[..available].copy_from_slice(&buf[READ_DATA_OFFSET..READ_DATA_OFFSET + available]);
    }
    FrameData::from_bytes(data)
}
