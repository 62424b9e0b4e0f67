// ps1mca/src/card/operations/read_all.rs

use crate::card::{FrameReport, Session};
use crate::constants::FRAME_COUNT;
use crate::protocol::commands::Command;
use crate::protocol::responses::read::{data_window, ReadFrameResponse};
use crate::types::{FrameAddress, FrameData, TransferOutcome};
use crate::Result;

use log::{info, warn};
use std::io::Write;

/// Read every frame of the card, address 0 through 1023 in order.
///
/// A frame is attempted exactly once; any failure is recorded in that
/// frame's report and the loop moves on. The sink receives 128 bytes per
/// frame no matter what (whatever the card returned, zero-padded when the
/// reply was short or absent), so byte offset `address * 128` always holds
/// frame `address`.
pub fn read_all<W: Write>(session: &mut Session, sink: &mut W) -> Result<Vec<FrameReport>> {
    let mut reports = Vec::with_capacity(FRAME_COUNT);

    for address in FrameAddress::all() {
        let command = Command::ReadFrame { address };
        let (outcomes, data) = match session.exchange(&command) {
            Err(e) => {
                warn!("frame {}: transport error: {}", address, e);
                (vec![TransferOutcome::TransportError], FrameData::zeroed())
            }
            Ok(reply) => match ReadFrameResponse::parse(&reply) {
                Err(e) => {
                    warn!("frame {}: malformed reply: {}", address, e);
                    let status = reply.first().copied().unwrap_or(0);
                    (
                        vec![TransferOutcome::ProtocolError { status }],
                        data_window(&reply),
                    )
                }
                Ok(response) => (response.outcomes(address), response.data),
            },
        };

        sink.write_all(data.as_bytes())?;

        for outcome in &outcomes {
            if *outcome != TransferOutcome::Success {
                warn!("frame {}: {}", address, outcome);
            }
        }
        reports.push(FrameReport { address, outcomes });
    }

    info!("read {} frames", reports.len());
    Ok(reports)
}
