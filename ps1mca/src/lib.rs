// ps1mca/src/lib.rs

//! ps1mca
//!
//! Pure Rust driver for the PlayStation 3 Memory Card Adaptor (CECHZM1,
//! SCPH-98042) talking to PS1 memory cards (SCPH-1020, SCPH-1170,
//! SCPH-119X) and PocketStation units (SCPH-4000).
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
