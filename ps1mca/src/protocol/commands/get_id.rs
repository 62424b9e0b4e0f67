// ps1mca/src/protocol/commands/get_id.rs

use super::long_header;
use crate::constants::{GET_ID_CMD_LEN, GET_ID_INNER_LEN, MC_CMD_GET_ID, PKST_CMD_GET_ID};

/// Encode the 14-byte get-id command. Bytes 6..14 stay zero; they are the
/// placeholders the card overwrites with ID1/ID2, the acknowledge pair and
/// the frame count/size pairs.
pub fn encode_get_id() -> Vec<u8> {
    let mut buf = vec![0u8; GET_ID_CMD_LEN];
    long_header(&mut buf, GET_ID_INNER_LEN, MC_CMD_GET_ID);
    buf
}

/// Encode the PocketStation get-id probe. Same shape as [`encode_get_id`]
/// but with the PocketStation opcode; the reply carries vendor-specific
/// state bytes instead of the memory-card signature.
pub fn encode_pocketstation_id() -> Vec<u8> {
    let mut buf = vec![0u8; GET_ID_CMD_LEN];
    long_header(&mut buf, GET_ID_INNER_LEN, PKST_CMD_GET_ID);
    buf
}
