// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the bounds-check policy.
//!
//! Debug-mode assertions that verify what the Kani proofs in `kani-proofs/`
//! establish mathematically. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the proved properties exactly
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Every function here restates a property the proofs depend on. Weakening
//! a contract here without touching the proofs means the two can drift.

/// Postcondition of a successful bounds check: the resolved index is a real
/// element index for the block.
///
/// # Panics (debug builds only)
/// Panics if `index >= len`, or if the resolved index disagrees with the
/// signed position it was derived from.
#[inline]
pub fn check_resolved_in_range(index: usize, len: usize, pos: isize) {
    debug_assert!(
        index < len,
        "Contract violation: resolved index {} >= block length {}",
        index,
        len
    );
    debug_assert!(
        index as isize == pos,
        "Contract violation: resolved index {} does not match position {}",
        index,
        pos
    );
}

/// Postcondition of saturating movement: the position landed where the
/// arithmetic claims, unless it hit an `isize` extreme.
///
/// # Panics (debug builds only)
/// Panics if the move neither landed exactly nor saturated.
#[inline]
pub fn check_moved_by(before: isize, delta: isize, after: isize) {
    debug_assert!(
        after == before.saturating_add(delta),
        "Contract violation: move from {} by {} landed at {}",
        before,
        delta,
        after
    );
}
