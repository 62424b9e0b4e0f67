// ps1mca/src/protocol/responses/mod.rs

//! Typed reply parsers, one module per command.
//!
//! Parsing is two-staged. `parse` validates the adaptor layer (length and,
//! for the single-exchange commands, the status pair) and fails closed.
//! The frame replies additionally expose `outcomes`, which runs the
//! card-level checks (acknowledge pair, address echo, checksum, end byte)
//! independently so the session can record every failure for a frame
//! instead of stopping at the first one.

pub mod get_id;
pub mod pocketstation;
pub mod read;
pub mod verify;
pub mod write;

pub use get_id::IdResponse;
pub use pocketstation::PocketStationStatus;
pub use read::ReadFrameResponse;
pub use verify::decode_verify;
pub use write::WriteFrameResponse;

use crate::constants::{STATUS_ACK, STATUS_SUCCESS, STATUS_WRONG};
use crate::types::TransferOutcome;

/// Evaluate the adaptor status pair of a long-form frame reply, pushing one
/// outcome per failed check. Shared by the read and write paths.
pub(crate) fn status_outcomes(status: [u8; 2], out: &mut Vec<TransferOutcome>) {
    if status[0] != STATUS_ACK {
        out.push(TransferOutcome::ProtocolError { status: status[0] });
    } else if status[1] == STATUS_WRONG {
        out.push(TransferOutcome::AuthenticationFailed);
    } else if status[1] != STATUS_SUCCESS {
        out.push(TransferOutcome::ProtocolError { status: status[1] });
    }
}
