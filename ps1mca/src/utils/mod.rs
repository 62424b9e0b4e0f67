//! Small, reusable helpers: hex dumps for buffer logging and timeout values.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
