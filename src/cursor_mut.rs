// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The exclusive (read-write) checked cursor.
//!
//! [`CheckedCursorMut`] is [`CheckedCursor`](crate::CheckedCursor) over an
//! exclusive borrow: same binding semantics, same free movement, same
//! check-at-access policy, plus the write paths
//! ([`get_mut`](CheckedCursorMut::get_mut), [`set`](CheckedCursorMut::set),
//! [`at_mut`](CheckedCursorMut::at_mut)).
//!
//! What the exclusive borrow takes away: the cursor is not `Copy`, and the
//! post-move forms hand back a *shared* snapshot rather than a second
//! writable cursor - Rust will not let two writers observe one block, and
//! that is the point. Downgrade with
//! [`as_cursor`](CheckedCursorMut::as_cursor) whenever read-only views,
//! comparisons or distances are needed.

use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::slice;

use crate::bounds;
use crate::cursor::CheckedCursor;
use crate::error::AccessError;
use crate::verify::contracts;

/// A run-time range-checked cursor with write access to its block.
#[derive(Debug)]
pub struct CheckedCursorMut<'a, T> {
    block: Option<&'a mut [T]>,
    pos: isize,
}

impl<'a, T> Default for CheckedCursorMut<'a, T> {
    /// An unbound cursor, same as [`CheckedCursorMut::unbound`].
    fn default() -> Self {
        Self::unbound()
    }
}

// =============================================================================
// CONSTRUCTION / BINDING
// =============================================================================

impl<'a, T> CheckedCursorMut<'a, T> {
    /// A cursor bound to nothing. Every access fails with
    /// [`AccessError::Unbound`].
    pub fn unbound() -> Self {
        CheckedCursorMut { block: None, pos: 0 }
    }

    /// Bind to a single element (a degenerate one-element range).
    pub fn single(elem: &'a mut T) -> Self {
        CheckedCursorMut {
            block: Some(slice::from_mut(elem)),
            pos: 0,
        }
    }

    /// Bind to `block`, positioned at its first element.
    pub fn new(block: &'a mut [T]) -> Self {
        CheckedCursorMut {
            block: Some(block),
            pos: 0,
        }
    }

    /// Bind to `block` with an explicit starting position, validated only
    /// at access time.
    pub fn with_pos(block: &'a mut [T], pos: isize) -> Self {
        CheckedCursorMut {
            block: Some(block),
            pos,
        }
    }

    /// Whether the cursor is bound to a block.
    pub fn is_bound(&self) -> bool {
        self.block.is_some()
    }

    /// Length of the bound block in elements, or `None` when unbound.
    pub fn bound_len(&self) -> Option<usize> {
        self.block.as_deref().map(<[T]>::len)
    }

    /// The current position, in elements from the lower bound.
    pub fn offset(&self) -> isize {
        self.pos
    }

    /// A read-only snapshot of this cursor at its current position.
    pub fn as_cursor(&self) -> CheckedCursor<'_, T> {
        CheckedCursor::from_raw_parts(self.block.as_deref(), self.pos)
    }

    /// Give up write access, keeping the binding for the full lifetime.
    pub fn into_cursor(self) -> CheckedCursor<'a, T> {
        CheckedCursor::from_raw_parts(self.block.map(|block| &*block), self.pos)
    }
}

// =============================================================================
// MOVEMENT (never checked, never fails)
// =============================================================================

impl<'a, T> CheckedCursorMut<'a, T> {
    /// Move forward one element. The pre-increment form.
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Move back one element. The pre-decrement form.
    pub fn retreat(&mut self) {
        self.advance_by(-1);
    }

    /// Move by an arbitrary signed element count, saturating at the `isize`
    /// extremes.
    pub fn advance_by(&mut self, n: isize) {
        let before = self.pos;
        self.pos = self.pos.saturating_add(n);
        contracts::check_moved_by(before, n, self.pos);
    }

    /// Move forward one element, returning a read-only snapshot at the
    /// pre-move position with the same binding. The post-increment form.
    pub fn post_advance(&mut self) -> CheckedCursor<'_, T> {
        let prior = self.pos;
        self.advance();
        CheckedCursor::from_raw_parts(self.block.as_deref(), prior)
    }

    /// Move back one element, returning a read-only snapshot at the
    /// pre-move position. The post-decrement form.
    pub fn post_retreat(&mut self) -> CheckedCursor<'_, T> {
        let prior = self.pos;
        self.retreat();
        CheckedCursor::from_raw_parts(self.block.as_deref(), prior)
    }
}

impl<'a, T> AddAssign<isize> for CheckedCursorMut<'a, T> {
    fn add_assign(&mut self, n: isize) {
        self.advance_by(n);
    }
}

impl<'a, T> SubAssign<isize> for CheckedCursorMut<'a, T> {
    fn sub_assign(&mut self, n: isize) {
        self.advance_by(n.saturating_neg());
    }
}

impl<'a, T> Add<isize> for CheckedCursorMut<'a, T> {
    type Output = Self;

    /// The cursor moved forward by `n`. Consumes and returns the cursor -
    /// an exclusive borrow cannot be duplicated into a second writer.
    fn add(mut self, n: isize) -> Self {
        self.advance_by(n);
        self
    }
}

impl<'a, T> Sub<isize> for CheckedCursorMut<'a, T> {
    type Output = Self;

    /// The cursor moved back by `n`.
    fn sub(mut self, n: isize) -> Self {
        self.advance_by(n.saturating_neg());
        self
    }
}

// =============================================================================
// ACCESS (always checked)
// =============================================================================

impl<'a, T> CheckedCursorMut<'a, T> {
    fn resolve(&self, pos: isize) -> Result<&T, AccessError> {
        let block = self
            .block
            .as_deref()
            .ok_or(AccessError::Unbound { offset: pos })?;
        let index = bounds::check_access(Some(block.len()), pos)?;
        Ok(&block[index])
    }

    fn resolve_mut(&mut self, pos: isize) -> Result<&mut T, AccessError> {
        let block = self
            .block
            .as_deref_mut()
            .ok_or(AccessError::Unbound { offset: pos })?;
        let index = bounds::check_access(Some(block.len()), pos)?;
        Ok(&mut block[index])
    }

    /// Dereference at the current position.
    pub fn get(&self) -> Result<&T, AccessError> {
        self.resolve(self.pos)
    }

    /// Mutably dereference at the current position.
    pub fn get_mut(&mut self) -> Result<&mut T, AccessError> {
        self.resolve_mut(self.pos)
    }

    /// Write through the cursor at the current position.
    pub fn set(&mut self, value: T) -> Result<(), AccessError> {
        *self.resolve_mut(self.pos)? = value;
        Ok(())
    }

    /// Indexed access at `lower + i`, independent of the current position.
    pub fn at(&self, i: isize) -> Result<&T, AccessError> {
        self.resolve(i)
    }

    /// Mutable indexed access at `lower + i`, independent of the current
    /// position.
    pub fn at_mut(&mut self, i: isize) -> Result<&mut T, AccessError> {
        self.resolve_mut(i)
    }
}

// =============================================================================
// COMPARISON (by position only)
// =============================================================================

impl<'a, T> PartialEq for CheckedCursorMut<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<'a, T> Eq for CheckedCursorMut<'a, T> {}

/// Compare against a raw position.
impl<'a, T> PartialEq<isize> for CheckedCursorMut<'a, T> {
    fn eq(&self, other: &isize) -> bool {
        self.pos == *other
    }
}
