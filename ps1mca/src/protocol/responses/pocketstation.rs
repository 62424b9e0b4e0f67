// ps1mca/src/protocol/responses/pocketstation.rs

use crate::protocol::parser;
use crate::Result;

/// State block a PocketStation returns to the get-id probe.
///
/// The layout past the status pair is vendor-specific and varies with
/// firmware, so only the adaptor layer is validated; the parsed fields are
/// reported as-is, never cross-checked against a fixed pattern.
#[derive(Debug, Clone)]
pub struct PocketStationStatus {
    /// Directory index of the currently selected file.
    pub directory_index: u16,
    /// The four communication flag bits, in bit order.
    pub com_flags: [bool; 4],
    /// The four serial-number bytes.
    pub serial: [u8; 4],
    raw: Vec<u8>,
}

impl PocketStationStatus {
    /// Parse a PocketStation get-id reply. Asserts adaptor acknowledge and
    /// command status only.
    pub fn parse(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, 16)?;
        parser::check_adaptor_status(data)?;
        parser::check_command_status(data)?;

        let directory_index = u16::from_le_bytes([data[6], data[7]]);
        let com_flags = [data[8] != 0, data[9] != 0, data[10] != 0, data[11] != 0];
        let mut serial = [0u8; 4];
        serial.copy_from_slice(&data[12..16]);

        Ok(Self {
            directory_index,
            com_flags,
            serial,
            raw: data.to_vec(),
        })
    }

    /// The whole raw reply, for display alongside the parsed fields.
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }
}
