// ps1mca/src/card/operations/write_range.rs

use crate::card::{FrameReport, Session, WriteAbort, WriteReport};
use crate::constants::FRAME_SIZE;
use crate::protocol::commands::Command;
use crate::protocol::responses::WriteFrameResponse;
use crate::types::{FrameAddress, FrameData, TransferOutcome};
use crate::utils::ms;
use crate::Result;

use log::{info, warn};
use std::thread;

/// Write frames `first..=last` from a flat card image.
///
/// An out-of-range or inverted range is not an error: it falls back to
/// rewriting the whole card. Each frame is attempted once; only the two
/// card-side write-reject codes stop the loop, every other failure (bad
/// checksum, bad frame, timeout) is recorded and the next address is
/// attempted. After each non-fatal frame the session pauses for the
/// configured write delay.
pub fn write_range(
    session: &mut Session,
    first: u16,
    last: u16,
    image: &[u8],
) -> Result<WriteReport> {
    let (first, last) = normalize_range(first, last);
    info!("writing frames {}..={}", first, last);

    let mut frames = Vec::new();
    for address in FrameAddress::span(first, last) {
        let data = frame_from_image(image, address);
        let command = Command::WriteFrame { address, data };

        let outcomes = match session.exchange(&command) {
            Err(e) => {
                warn!("frame {}: transport error: {}", address, e);
                vec![TransferOutcome::TransportError]
            }
            Ok(reply) => match WriteFrameResponse::parse(&reply) {
                Err(e) => {
                    warn!("frame {}: malformed reply: {}", address, e);
                    let status = reply.first().copied().unwrap_or(0);
                    vec![TransferOutcome::ProtocolError { status }]
                }
                Ok(response) => response.outcomes(),
            },
        };

        for outcome in &outcomes {
            if *outcome != TransferOutcome::Success {
                warn!("frame {}: {}", address, outcome);
            }
        }

        let fatal = outcomes.iter().find(|o| o.is_fatal()).cloned();
        frames.push(FrameReport { address, outcomes });

        if let Some(outcome) = fatal {
            warn!("write aborted at frame {}: {}", address, outcome);
            return Ok(WriteReport {
                first,
                last,
                frames,
                abort: Some(WriteAbort { address, outcome }),
            });
        }

        if session.config.write_delay_ms > 0 {
            thread::sleep(ms(session.config.write_delay_ms));
        }
    }

    info!("wrote {} frames", frames.len());
    Ok(WriteReport {
        first,
        last,
        frames,
        abort: None,
    })
}

/// Clamp an unusable range to the whole card instead of rejecting the call.
/// Resuming an interrupted write depends on this being forgiving.
fn normalize_range(first: u16, last: u16) -> (FrameAddress, FrameAddress) {
    match (FrameAddress::new(first), FrameAddress::new(last)) {
        (Ok(f), Ok(l)) if f <= l => (f, l),
        _ => {
            warn!(
                "frame range {}..={} is not usable; rewriting the whole card instead",
                first, last
            );
            (FrameAddress::MIN, FrameAddress::MAX)
        }
    }
}

/// Cut one frame out of a flat card image, zero-padding past end of file.
fn frame_from_image(image: &[u8], address: FrameAddress) -> FrameData {
    let mut out = [0u8; FRAME_SIZE];
    let start = address.byte_offset();
    if start < image.len() {
        let end = usize::min(start + FRAME_SIZE, image.len());
        out[..end - start].copy_from_slice(&image[start..end]);
    }
    FrameData::from_bytes(out)
}
