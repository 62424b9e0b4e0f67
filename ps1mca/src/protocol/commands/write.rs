// ps1mca/src/protocol/commands/write.rs

use super::long_header;
use crate::constants::{
    CMD_ADDRESS_OFFSET, FRAME_SIZE, MC_CMD_WRITE, WRITE_CHECKSUM_OFFSET, WRITE_DATA_OFFSET,
    WRITE_INNER_LEN, WRITE_LEN,
};
use crate::protocol::checksum::frame_checksum;
use crate::types::{FrameAddress, FrameData};

/// Encode a 142-byte write command for one frame. The checksum over address
/// and data is generated here; the trailing three zero bytes are the
/// placeholders for the acknowledge pair and the end byte.
pub fn encode_write_frame(address: FrameAddress, data: &FrameData) -> Vec<u8> {
    let mut buf = vec![0u8; WRITE_LEN];
    long_header(&mut buf, WRITE_INNER_LEN, MC_CMD_WRITE);
    buf[CMD_ADDRESS_OFFSET] = address.msb();
    buf[CMD_ADDRESS_OFFSET + 1] = address.lsb();
    buf[WRITE_DATA_OFFSET..WRITE_DATA_OFFSET + FRAME_SIZE].copy_from_slice(data.as_bytes());
    buf[WRITE_CHECKSUM_OFFSET] = frame_checksum(address.msb(), address.lsb(), data.as_bytes());
    buf
}
