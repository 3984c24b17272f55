// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The built-in drill suite.
//!
//! Each drill is generic over the element type and returns a plain boolean,
//! per the harness convention. They walk the cursor straight into every
//! edge the policy guards: one-before-start, one-past-end, absolute indexes
//! off both ends, unbound access after movement.
//!
//! The drills deliberately overlap the test suites under `tests/` - they
//! exist so the shipped binary can demonstrate the checks on demand, not to
//! replace the tests.

use crate::cursor::CheckedCursor;
use crate::cursor_mut::CheckedCursorMut;
use crate::error::AccessError;

/// Walk a 10-element block off both edges; refusals and recoveries must
/// land exactly on the boundary.
pub fn edge_excursion<T: Default + Clone>() -> bool {
    const SIZE: usize = 10;
    let mut block = vec![T::default(); SIZE];

    {
        let mut p = CheckedCursorMut::new(&mut block);

        // One before the start: the move is fine, the write is not.
        p.retreat();
        if !matches!(
            p.set(T::default()),
            Err(AccessError::OutOfRange { offset: -1, .. })
        ) {
            return false;
        }

        // Step back in and the same write goes through.
        p.advance();
        if p.set(T::default()).is_err() {
            return false;
        }

        // March to one past the end.
        for _ in 0..SIZE {
            p.advance();
        }
        let at_end = matches!(
            p.get(),
            Err(AccessError::OutOfRange { offset, .. }) if offset == SIZE as isize
        );
        if !at_end {
            return false;
        }

        p.retreat();
        if p.get().is_err() {
            return false;
        }
    }

    // Pre- and post-increment walks both stop exactly at one-past-the-end.
    let mut pre = CheckedCursor::new(&block);
    while pre != SIZE as isize {
        pre.advance();
    }
    let mut post = CheckedCursor::new(&block);
    while post != SIZE as isize {
        let _ = post.post_advance();
    }
    pre == post && pre.get().is_err()
}

/// Absolute indexing off both ends of a 100-element block, anchored to the
/// lower bound no matter where the cursor stands.
pub fn indexed_access<T: Default + Clone>() -> bool {
    const SIZE: usize = 100;
    let mut block = vec![T::default(); SIZE];

    {
        let mut p = CheckedCursorMut::new(&mut block);

        if !matches!(
            p.at(-1),
            Err(AccessError::OutOfRange { offset: -1, .. })
        ) {
            return false;
        }
        if p.at_mut(0).is_err() {
            return false;
        }
        if !matches!(
            p.at(SIZE as isize),
            Err(AccessError::OutOfRange { .. })
        ) {
            return false;
        }
        if p.at_mut(SIZE as isize - 1).is_err() {
            return false;
        }

        // Indexing ignores the cursor's own position.
        p.advance_by(SIZE as isize / 2);
        if p.at(0).is_err() {
            return false;
        }
    }

    // Read-only bindings one off each edge, and one on it.
    let before = CheckedCursor::with_pos(&block, -1);
    let start = CheckedCursor::new(&block);
    let past = CheckedCursor::with_pos(&block, SIZE as isize);
    before.get().is_err() && start.get().is_ok() && past.get().is_err()
}

/// Pre- and post-increment agree on where the cursor lands; offsets and
/// distances round-trip; unbound cursors refuse after any movement.
pub fn movement_parity<T: Default + Clone>() -> bool {
    const SIZE: usize = 10;
    let block = vec![T::default(); SIZE];

    let mut pre = CheckedCursor::new(&block);
    let mut post = CheckedCursor::new(&block);
    pre.advance();
    let snapshot = post.post_advance();
    if pre != post || snapshot != 0isize {
        return false;
    }

    let p = CheckedCursor::with_pos(&block, 2);
    let q = p + 5;
    if q - p != 5 || q - 5 != p {
        return false;
    }
    // The shifted cursor keeps the original lower edge.
    if q.at(0).is_err() {
        return false;
    }

    let mut unbound: CheckedCursor<'_, T> = CheckedCursor::unbound();
    unbound.advance_by(3);
    matches!(unbound.get(), Err(e) if e.is_unbound())
}
