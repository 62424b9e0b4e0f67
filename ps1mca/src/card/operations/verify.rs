// ps1mca/src/card/operations/verify.rs

use crate::card::Session;
use crate::protocol::commands::Command;
use crate::protocol::responses::decode_verify;
use crate::types::CardKind;
use crate::Result;

use log::info;

/// Single-exchange workflow: ask the adaptor what type of card is inserted.
pub fn verify_card(session: &mut Session) -> Result<CardKind> {
    let reply = session.exchange(&Command::VerifyCardType)?;
    let kind = decode_verify(&reply)?;
    info!("card type: {}", kind);
    Ok(kind)
}
