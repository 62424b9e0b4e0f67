// ps1mca/src/card/operations/identify.rs

use crate::card::{identity, Session};
use crate::protocol::commands::Command;
use crate::protocol::responses::IdResponse;
use crate::types::CardIdentity;
use crate::Result;

use log::info;

/// Single-exchange workflow: run get-id and classify the card. The parsed
/// reply is returned alongside the classification so callers can show the
/// reported geometry.
pub fn identify(session: &mut Session) -> Result<(CardIdentity, IdResponse)> {
    let reply = session.exchange(&Command::GetId)?;
    let response = IdResponse::parse(&reply)?;
    let identity = identity::classify(&response);
    info!(
        "card identity: {} (reports {} frames of {} bytes)",
        identity,
        response.reported_frame_count(),
        response.reported_frame_size()
    );
    Ok((identity, response))
}
