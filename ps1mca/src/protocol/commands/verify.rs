// ps1mca/src/protocol/commands/verify.rs

use crate::constants::{CMD_MAGIC, CMD_VERIFY_CARD_TYPE};

/// Encode the short-form verify command: `[0xaa, 0x40]`.
pub fn encode_verify() -> Vec<u8> {
    vec![CMD_MAGIC, CMD_VERIFY_CARD_TYPE]
}
