// ps1mca/src/card/operations/pocketstation.rs

use crate::card::Session;
use crate::protocol::commands::Command;
use crate::protocol::responses::PocketStationStatus;
use crate::Result;

use log::info;

/// Single-exchange workflow: PocketStation get-id probe. The reply is
/// vendor-specific state, reported but not validated beyond the adaptor
/// status pair.
pub fn pocketstation_status(session: &mut Session) -> Result<PocketStationStatus> {
    let reply = session.exchange(&Command::PocketStationId)?;
    let status = PocketStationStatus::parse(&reply)?;
    info!(
        "pocketstation: directory index {}, com flags {:?}",
        status.directory_index, status.com_flags
    );
    Ok(status)
}
