// ps1mca/src/protocol/responses/verify.rs

use crate::constants::VERIFY_LEN;
use crate::protocol::parser;
use crate::types::CardKind;
use crate::Result;

/// Decode the 2-byte verify reply into the inserted card kind.
pub fn decode_verify(data: &[u8]) -> Result<CardKind> {
    parser::exact_len(data, VERIFY_LEN)?;
    parser::check_adaptor_status(data)?;
    Ok(CardKind::from_code(data[1]))
}
