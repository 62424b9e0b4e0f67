// ps1mca/src/card/mod.rs

//! Card session: owns the transport and drives the per-frame workflows.

use crate::protocol::commands::Command;
use crate::protocol::responses::{IdResponse, PocketStationStatus};
use crate::transport::Transport;
use crate::types::{CardIdentity, CardKind};
use crate::utils::{bytes_to_hex, DEFAULT_EXCHANGE_TIMEOUT_MS, DEFAULT_WRITE_DELAY_MS};
use crate::Result;

use log::debug;
use std::io::Write;

pub mod identity;
pub mod operations;
pub mod report;

pub use report::{FrameReport, Summary, WriteAbort, WriteReport};

/// Session tuning knobs.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Per-exchange timeout in milliseconds.
    pub timeout_ms: u64,
    /// Pause between written frames in milliseconds. The medium needs
    /// settling time after a write; original cards lose data without it.
    pub write_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_EXCHANGE_TIMEOUT_MS,
            write_delay_ms: DEFAULT_WRITE_DELAY_MS,
        }
    }
}

/// A connected card session.
///
/// The session exclusively owns its transport for its whole lifetime, so
/// there is never more than one outstanding exchange; the transport is
/// released when the session is dropped, whichever way a workflow ended.
pub struct Session {
    transport: Box<dyn Transport>,
    config: SessionConfig,
}

impl Session {
    /// Create a session with default configuration.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(transport: Box<dyn Transport>, config: SessionConfig) -> Self {
        Self { transport, config }
    }

    /// Current configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// One command/reply round trip. Every workflow funnels through here.
    pub(crate) fn exchange(&mut self, command: &Command) -> Result<Vec<u8>> {
        let buf = command.encode();
        debug!("send cmd {:#04x}: {}", command.opcode(), bytes_to_hex(&buf));
        self.transport.send(&buf)?;
        let reply = self.transport.receive(self.config.timeout_ms)?;
        debug!("recv {} bytes: {}", reply.len(), bytes_to_hex(&reply));
        Ok(reply)
    }

    /// Ask the adaptor what type of card is inserted.
    pub fn verify_card(&mut self) -> Result<CardKind> {
        operations::verify_card(self)
    }

    /// Run the get-id exchange and classify the card.
    pub fn identify(&mut self) -> Result<(CardIdentity, IdResponse)> {
        operations::identify(self)
    }

    /// Run the PocketStation get-id probe.
    pub fn pocketstation_status(&mut self) -> Result<PocketStationStatus> {
        operations::pocketstation_status(self)
    }

    /// Read the whole card, frame 0 through 1023, into `sink`. The sink
    /// always receives exactly 131072 bytes in address order.
    pub fn read_all<W: Write>(&mut self, sink: &mut W) -> Result<Vec<FrameReport>> {
        operations::read_all(self, sink)
    }

    /// Write frames `first..=last` from a flat card image. An invalid range
    /// falls back to rewriting the whole card.
    pub fn write_range(&mut self, first: u16, last: u16, image: &[u8]) -> Result<WriteReport> {
        operations::write_range(self, first, last, image)
    }
}
