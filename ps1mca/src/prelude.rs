// ps1mca/src/prelude.rs

//! One-stop imports for driver consumers.

pub use crate::card::{FrameReport, Session, SessionConfig, Summary, WriteAbort, WriteReport};
pub use crate::protocol::responses::{IdResponse, PocketStationStatus};
pub use crate::protocol::{frame_checksum, Command};
pub use crate::transport::Transport;
pub use crate::{
    CardIdentity, CardKind, Error, FrameAddress, FrameData, MemoryEndByte, Result, TransferOutcome,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
