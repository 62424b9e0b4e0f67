// Shared fixtures for integration tests.
#![allow(dead_code)]

pub mod fixtures;

/// Route library logs through the test harness when RUST_LOG is set.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}
