// ps1mca/src/protocol/responses/write.rs

use super::status_outcomes;
use crate::constants::{WRITE_END_OFFSET, WRITE_LEN};
use crate::protocol::parser;
use crate::types::{MemoryEndByte, TransferOutcome};
use crate::Result;

/// Raw fields of a 142-byte write reply.
#[derive(Debug, Clone)]
pub struct WriteFrameResponse {
    /// Adaptor status pair (bytes 0..2).
    pub status: [u8; 2],
    /// Memory End Byte, classified.
    pub end_byte: MemoryEndByte,
}

impl WriteFrameResponse {
    /// Split a full-length write reply into its fields.
    pub fn parse(buf: &[u8]) -> Result<Self> {
        parser::exact_len(buf, WRITE_LEN)?;
        Ok(Self {
            status: [buf[0], buf[1]],
            end_byte: MemoryEndByte::from_code(buf[WRITE_END_OFFSET]),
        })
    }

    /// Run every check against the reply: adaptor status, then the end
    /// byte. A clean reply yields a single `Success`; the two reject codes
    /// map to the fatal outcomes that abort the write workflow.
    pub fn outcomes(&self) -> Vec<TransferOutcome> {
        let mut out = Vec::new();

        status_outcomes(self.status, &mut out);

        match self.end_byte {
            MemoryEndByte::Good => {}
            MemoryEndByte::BadChecksum => out.push(TransferOutcome::WriteBadChecksum),
            MemoryEndByte::BadFrame => out.push(TransferOutcome::WriteBadFrame),
            MemoryEndByte::RejectExecutingFile => {
                out.push(TransferOutcome::WriteRejectedExecutingFile)
            }
            MemoryEndByte::RejectProtectedRegion => {
                out.push(TransferOutcome::WriteRejectedProtectedRegion)
            }
            MemoryEndByte::Other(code) => {
                out.push(TransferOutcome::UnexpectedEndByte { actual: code })
            }
        }

        if out.is_empty() {
            out.push(TransferOutcome::Success);
        }
        out
    }
}
