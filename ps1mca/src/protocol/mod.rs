// ps1mca/src/protocol/mod.rs

//! Wire protocol: command encoders, reply parsers and the frame checksum.

pub mod checksum;
pub mod commands;
pub mod parser;
pub mod responses;

pub use checksum::frame_checksum;
pub use commands::Command;
pub use responses::*;
