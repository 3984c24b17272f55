// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the custos bounds-check policy.
//!
//! This standalone crate extracts the access check and the saturating
//! movement arithmetic and provides mathematical proofs of their
//! correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: check_access and movement never panic for any input
//! 2. **Soundness**: `Ok(i)` implies `i < len` and `i as isize == pos`
//! 3. **Completeness**: every in-range position is accepted
//! 4. **Round-trip**: moving by `n` then `-n` restores the position
//!    (away from the isize extremes)

/// Why an access was refused (mirror of `custos::AccessError`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    Unbound { offset: isize },
    OutOfRange { offset: isize, len: usize },
}

// ============================================================================
// THE POLICY (copied from src/bounds.rs, contracts elided)
// ============================================================================

/// Resolve a signed cursor position against a binding, or refuse.
pub fn check_access(len: Option<usize>, pos: isize) -> Result<usize, AccessError> {
    let len = match len {
        Some(len) => len,
        None => return Err(AccessError::Unbound { offset: pos }),
    };

    if pos < 0 || pos as usize >= len {
        return Err(AccessError::OutOfRange { offset: pos, len });
    }

    Ok(pos as usize)
}

/// Saturating movement (copied from the cursor types' `advance_by`).
pub fn move_by(pos: isize, n: isize) -> isize {
    pos.saturating_add(n)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify check_access never panics and every verdict is consistent.
    #[kani::proof]
    fn verify_check_access_no_panic() {
        let len: Option<usize> = kani::any();
        let pos: isize = kani::any();

        // This must not panic for any (len, pos)
        match check_access(len, pos) {
            Ok(index) => {
                // Soundness: only bound, in-range positions resolve
                kani::assert(len.is_some(), "Ok requires a bound cursor");
                if let Some(len) = len {
                    kani::assert(index < len, "resolved index must be in range");
                }
                kani::assert(index as isize == pos, "resolved index must equal pos");
            }
            Err(AccessError::Unbound { offset }) => {
                kani::assert(len.is_none(), "Unbound only for unbound cursors");
                kani::assert(offset == pos, "diagnostic offset must equal pos");
            }
            Err(AccessError::OutOfRange { offset, len: rlen }) => {
                kani::assert(len == Some(rlen), "reported length must match binding");
                kani::assert(offset == pos, "diagnostic offset must equal pos");
                kani::assert(
                    pos < 0 || pos as usize >= rlen,
                    "OutOfRange only outside [0, len)",
                );
            }
        }
    }

    /// Verify completeness: every in-range position is accepted.
    #[kani::proof]
    fn verify_check_access_complete() {
        let len: usize = kani::any();
        let pos: isize = kani::any();
        kani::assume(pos >= 0);
        kani::assume((pos as usize) < len);

        kani::assert(
            check_access(Some(len), pos) == Ok(pos as usize),
            "in-range access must be permitted",
        );
    }

    /// Verify movement never panics and lands where saturation says.
    #[kani::proof]
    fn verify_move_by_no_panic() {
        let pos: isize = kani::any();
        let n: isize = kani::any();

        let landed = move_by(pos, n);
        kani::assert(
            landed == pos.saturating_add(n),
            "movement must be saturating addition",
        );
    }

    /// Verify round-trip: moving by n then -n restores pos, away from the
    /// isize extremes where saturation clips.
    #[kani::proof]
    fn verify_move_round_trip() {
        let pos: isize = kani::any();
        let n: isize = kani::any();
        kani::assume(pos > isize::MIN / 2 && pos < isize::MAX / 2);
        kani::assume(n > isize::MIN / 2 && n < isize::MAX / 2);

        let there = move_by(pos, n);
        let back = move_by(there, -n);
        kani::assert(back == pos, "movement must round-trip");
    }

    /// Verify the policy is invariant under movement composition: checking
    /// after two moves equals checking the summed position.
    #[kani::proof]
    fn verify_check_after_composed_moves() {
        let len: usize = kani::any();
        let pos: isize = kani::any();
        let a: isize = kani::any();
        let b: isize = kani::any();
        kani::assume(pos.checked_add(a).and_then(|p| p.checked_add(b)).is_some());
        kani::assume(a.checked_add(b).is_some());

        let stepped = move_by(move_by(pos, a), b);
        let jumped = move_by(pos, a + b);
        kani::assert(
            check_access(Some(len), stepped) == check_access(Some(len), jumped),
            "composed and summed movement must check identically",
        );
    }
}

// ============================================================================
// PLAIN TESTS (the proofs' base cases, runnable without Kani)
// ============================================================================
