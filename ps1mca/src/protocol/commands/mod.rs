// ps1mca/src/protocol/commands/mod.rs

pub mod get_id;
pub mod read;
pub mod verify;
pub mod write;

pub use get_id::{encode_get_id, encode_pocketstation_id};
pub use read::encode_read_frame;
pub use verify::encode_verify;
pub use write::encode_write_frame;

use crate::constants::{CMD_MAGIC, CMD_TYPE_LONG, MC_ACCESS};
use crate::types::{FrameAddress, FrameData};

/// High-level command enum. One instance is built per exchange; encoding is
/// deterministic, so the same command always produces the same bytes.
#[derive(Debug, Clone)]
pub enum Command {
    /// Ask the adaptor what type of card is inserted (PS1 or PS2).
    VerifyCardType,
    /// Ask the card for its id/geometry reply.
    GetId,
    /// PocketStation-specific get-id probe.
    PocketStationId,
    /// Read one 128-byte frame.
    ReadFrame {
        /// Frame to read.
        address: FrameAddress,
    },
    /// Write one 128-byte frame.
    WriteFrame {
        /// Frame to write.
        address: FrameAddress,
        /// Frame contents.
        data: FrameData,
    },
}

impl Command {
    /// The byte that distinguishes this command on the wire: the command
    /// class for the short form, the inner opcode for long-form commands.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::VerifyCardType => crate::constants::CMD_VERIFY_CARD_TYPE,
            Self::GetId => crate::constants::MC_CMD_GET_ID,
            Self::PocketStationId => crate::constants::PKST_CMD_GET_ID,
            Self::ReadFrame { .. } => crate::constants::MC_CMD_READ,
            Self::WriteFrame { .. } => crate::constants::MC_CMD_WRITE,
        }
    }

    /// Encode the command into the exact wire buffer.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::VerifyCardType => encode_verify(),
            Self::GetId => encode_get_id(),
            Self::PocketStationId => encode_pocketstation_id(),
            Self::ReadFrame { address } => encode_read_frame(*address),
            Self::WriteFrame { address, data } => encode_write_frame(*address, data),
        }
    }
}

/// Fill in the 6-byte long-form header: adaptor magic, long command class,
/// inner length, pad, Memory Card Access, inner opcode. The rest of `buf`
/// stays zeroed, which is what the card expects for the reply placeholders.
pub(crate) fn long_header(buf: &mut [u8], inner_len: u8, opcode: u8) {
    buf[0] = CMD_MAGIC;
    buf[1] = CMD_TYPE_LONG;
    buf[2] = inner_len;
    buf[3] = 0x00;
    buf[4] = MC_ACCESS;
    buf[5] = opcode;
}
