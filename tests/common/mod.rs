//! Shared test utilities and fixtures.

#![allow(dead_code)]

// Re-export canonical test utilities from custos::testing
pub use custos::testing::{int_block, probe_block, Probe};

/// Block size used by the named end-to-end scenarios.
pub const SCENARIO_SIZE: usize = 10;

/// The standard 10-element scenario block: `[0, 1, ..., 9]`.
pub fn scenario_block() -> Vec<i32> {
    int_block(SCENARIO_SIZE)
}
