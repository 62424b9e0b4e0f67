// ps1mca/src/protocol/parser.rs

use crate::constants::{STATUS_ACK, STATUS_SUCCESS, STATUS_WRONG};
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn exact_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Check the adaptor acknowledge byte (byte 0 of every reply).
pub fn check_adaptor_status(data: &[u8]) -> Result<()> {
    let actual = byte_at(data, 0)?;
    if actual != STATUS_ACK {
        return Err(Error::UnexpectedStatus {
            expected: STATUS_ACK,
            actual,
        });
    }
    Ok(())
}

/// Check the command status byte (byte 1 of long-form replies).
///
/// 0x5a means the command was accepted; 0xaf means the card failed
/// authentication; anything else is a protocol violation.
pub fn check_command_status(data: &[u8]) -> Result<()> {
    let actual = byte_at(data, 1)?;
    match actual {
        STATUS_SUCCESS => Ok(()),
        STATUS_WRONG => Err(Error::AuthenticationFailed),
        _ => Err(Error::UnexpectedStatus {
            expected: STATUS_SUCCESS,
            actual,
        }),
    }
}
