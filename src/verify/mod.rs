// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrappers** ([`ResolvedCursor`]) that make invalid states
//!    unrepresentable. If it compiles, the position was checked.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are
//!    violated. Zero-cost in release, but catch bugs during development.
//!
//! The third leg lives outside `src/`: the `kani-proofs/` crate proves the
//! bounds-check policy itself, and the contracts here restate its theorems
//! so tests trip early if the implementation drifts.

mod types;
pub mod contracts;

pub use types::*;
