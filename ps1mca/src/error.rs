// ps1mca/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("adaptor not found (is the CECHZM1 plugged in?)")]
    DeviceNotFound,

    // USB 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    #[cfg(not(feature = "usb"))]
    #[error("usb error: {0}")]
    UsbString(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected transfer length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unexpected adaptor status: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedStatus { expected: u8, actual: u8 },

    #[error("card authentication failed")]
    AuthenticationFailed,

    #[error("frame address out of range: {0}")]
    AddressOutOfRange(u16),

    #[error("operation timed out")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, Error>;
