// ps1mca/src/protocol/commands/read.rs

use super::long_header;
use crate::constants::{CMD_ADDRESS_OFFSET, MC_CMD_READ, READ_INNER_LEN, READ_LEN};
use crate::types::FrameAddress;

/// Encode a 144-byte read command for one frame.
///
/// Everything after the address is zero: 134 placeholder bytes the card
/// overwrites with the acknowledge pair, the echoed address, the 128 data
/// bytes, the checksum and the end byte.
pub fn encode_read_frame(address: FrameAddress) -> Vec<u8> {
    let mut buf = vec![0u8; READ_LEN];
    long_header(&mut buf, READ_INNER_LEN, MC_CMD_READ);
    buf[CMD_ADDRESS_OFFSET] = address.msb();
    buf[CMD_ADDRESS_OFFSET + 1] = address.lsb();
    buf
}
