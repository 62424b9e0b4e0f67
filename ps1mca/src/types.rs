// ps1mca/src/types.rs

use crate::constants::{
    CARD_TYPE_PS1, CARD_TYPE_PS2, FRAME_SIZE, MAX_FRAME_ADDRESS, MEB_BAD_CHECKSUM, MEB_BAD_FRAME,
    MEB_GOOD, MEB_REJECT_EXECUTING, MEB_REJECT_PROTECTED,
};
use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// Frame address - Newtype Pattern (10 ビット, 0..=1023)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct FrameAddress(u16);

impl FrameAddress {
    /// First frame on the card.
    pub const MIN: FrameAddress = FrameAddress(0);

    /// Last frame on the card.
    pub const MAX: FrameAddress = FrameAddress(MAX_FRAME_ADDRESS);

    /// Validate a raw address against the 10-bit frame space.
    pub fn new(value: u16) -> crate::Result<Self> {
        if value > MAX_FRAME_ADDRESS {
            return Err(Error::AddressOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Rejoin an address from the wire representation.
    pub fn from_parts(msb: u8, lsb: u8) -> crate::Result<Self> {
        Self::new(u16::from_be_bytes([msb, lsb]))
    }

    /// Raw address value.
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// High byte as sent on the wire.
    pub const fn msb(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Low byte as sent on the wire.
    pub const fn lsb(&self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Byte offset of this frame inside a flat card image.
    pub const fn byte_offset(&self) -> usize {
        self.0 as usize * FRAME_SIZE
    }

    /// Iterate every frame on the card in increasing address order.
    pub fn all() -> impl Iterator<Item = FrameAddress> {
        (0..=MAX_FRAME_ADDRESS).map(FrameAddress)
    }

    /// Iterate the inclusive range `first..=last` in increasing order.
    pub fn span(first: FrameAddress, last: FrameAddress) -> impl Iterator<Item = FrameAddress> {
        (first.0..=last.0).map(FrameAddress)
    }
}

/// One frame of card data - Newtype Pattern (128 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameData([u8; FRAME_SIZE]);

impl FrameData {
    /// Wrap an existing frame buffer.
    pub fn from_bytes(bytes: [u8; FRAME_SIZE]) -> Self {
        Self(bytes)
    }

    /// An all-zero frame, used to keep dump offsets aligned for failed reads.
    pub fn zeroed() -> Self {
        Self([0u8; FRAME_SIZE])
    }

    /// Borrow the raw frame bytes.
    pub fn as_bytes(&self) -> &[u8; FRAME_SIZE] {
        &self.0
    }

    /// Hex dump of the frame, for logging.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl Default for FrameData {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl TryFrom<&[u8]> for FrameData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != FRAME_SIZE {
            return Err(Error::InvalidLength {
                expected: FRAME_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; FRAME_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Card type reported by the adaptor's verify command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CardKind {
    /// PS1 memory card (SCPH-1020 family).
    #[display(fmt = "PS1 memory card")]
    Ps1,
    /// PS2 memory card; recognized but not supported by this driver.
    #[display(fmt = "PS2 memory card (not supported)")]
    Ps2,
    /// Anything else the adaptor reported.
    #[display(fmt = "unknown card type ({:#04x})", _0)]
    Unknown(u8),
}

impl CardKind {
    /// Map the verify reply code to a card kind.
    pub fn from_code(code: u8) -> Self {
        match code {
            CARD_TYPE_PS1 => Self::Ps1,
            CARD_TYPE_PS2 => Self::Ps2,
            other => Self::Unknown(other),
        }
    }
}

/// Classification of a card from its get-id signature window.
///
/// An original memory card and a PocketStation present the same signature, so
/// they cannot be told apart here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CardIdentity {
    /// Original PS memory card (SCPH-1020, SCPH-1170, SCPH-119X) or
    /// PocketStation (SCPH-4000).
    #[display(fmt = "original PS memory card or PocketStation")]
    MemoryCard,
    /// Signature window did not match; most likely a third-party card.
    #[display(fmt = "unofficial memory card")]
    Unofficial,
}

/// Memory End Byte of a write reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MemoryEndByte {
    /// 0x47, the frame was written.
    #[display(fmt = "good")]
    Good,
    /// 0x4e, the card recomputed a different checksum.
    #[display(fmt = "bad checksum")]
    BadChecksum,
    /// 0xff, the addressed frame is bad.
    #[display(fmt = "bad frame")]
    BadFrame,
    /// 0xfd, write to the directory entry of the currently executed file.
    #[display(fmt = "write rejected: directory entry of the executing file")]
    RejectExecutingFile,
    /// 0xfe, write to the protected broken-frame region.
    #[display(fmt = "write rejected: write-protected region")]
    RejectProtectedRegion,
    /// Any other value.
    #[display(fmt = "unknown end byte ({:#04x})", _0)]
    Other(u8),
}

impl MemoryEndByte {
    /// Map a raw end byte to its classification.
    pub fn from_code(code: u8) -> Self {
        match code {
            MEB_GOOD => Self::Good,
            MEB_BAD_CHECKSUM => Self::BadChecksum,
            MEB_BAD_FRAME => Self::BadFrame,
            MEB_REJECT_EXECUTING => Self::RejectExecutingFile,
            MEB_REJECT_PROTECTED => Self::RejectProtectedRegion,
            other => Self::Other(other),
        }
    }

    /// Raw wire value.
    pub fn code(&self) -> u8 {
        match self {
            Self::Good => MEB_GOOD,
            Self::BadChecksum => MEB_BAD_CHECKSUM,
            Self::BadFrame => MEB_BAD_FRAME,
            Self::RejectExecutingFile => MEB_REJECT_EXECUTING,
            Self::RejectProtectedRegion => MEB_REJECT_PROTECTED,
            Self::Other(code) => *code,
        }
    }
}

/// Result of the independent checks run against one frame exchange.
///
/// A frame collects one entry per failed check, or a single [`Success`]
/// entry when every check passed. Only the two write-reject codes abort a
/// workflow; everything else is recorded and the loop moves on.
///
/// [`Success`]: TransferOutcome::Success
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TransferOutcome {
    /// Every check on the reply passed.
    #[display(fmt = "ok")]
    Success,
    /// The exchange itself failed (send error, receive error or timeout).
    #[display(fmt = "transport error")]
    TransportError,
    /// The adaptor status bytes did not carry the expected ack/success pair.
    #[display(fmt = "protocol error (status {:#04x})", status)]
    ProtocolError {
        /// The offending status byte.
        status: u8,
    },
    /// The adaptor reported failed card authentication.
    #[display(fmt = "authentication failed")]
    AuthenticationFailed,
    /// The command acknowledge pair was wrong.
    #[display(fmt = "command acknowledge mismatch ({:02x} {:02x})", "actual[0]", "actual[1]")]
    AckMismatch {
        /// The pair the card actually sent.
        actual: [u8; 2],
    },
    /// The card echoed back a different frame address.
    #[display(fmt = "address echo mismatch (card answered for frame {})", actual)]
    AddressEchoMismatch {
        /// The address the card echoed.
        actual: u16,
    },
    /// The reply checksum does not cover the reply data.
    #[display(fmt = "checksum mismatch (expected {:#04x}, got {:#04x})", expected, actual)]
    ChecksumMismatch {
        /// Checksum recomputed over the echoed address and data.
        expected: u8,
        /// Checksum byte found in the reply.
        actual: u8,
    },
    /// A read reply ended with something other than the good end byte.
    #[display(fmt = "unexpected end byte ({:#04x})", actual)]
    UnexpectedEndByte {
        /// The end byte found in the reply.
        actual: u8,
    },
    /// Write reply: card recomputed a different checksum.
    #[display(fmt = "write failed: bad checksum")]
    WriteBadChecksum,
    /// Write reply: the addressed frame is bad.
    #[display(fmt = "write failed: bad frame")]
    WriteBadFrame,
    /// Write reply: directory entry of the currently executed file. Fatal.
    #[display(fmt = "write rejected: directory entry of the executing file")]
    WriteRejectedExecutingFile,
    /// Write reply: write-protected broken-frame region. Fatal.
    #[display(fmt = "write rejected: write-protected region")]
    WriteRejectedProtectedRegion,
}

impl TransferOutcome {
    /// Whether this outcome aborts the whole write workflow.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::WriteRejectedExecutingFile | Self::WriteRejectedProtectedRegion
        )
    }
}
