// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type wrappers that make invalid states unrepresentable.
//!
//! A [`CheckedCursor`](crate::CheckedCursor) pays for its freedom of
//! movement with a fallible `get()`. When a position has already been
//! validated and will not move again, that `Result` is noise. Wrap the
//! cursor in a [`ResolvedCursor`]: the bounds check runs once at
//! construction, and from then on dereferencing is infallible - the wrapper
//! is immutable, so the invariant it checked cannot rot.

use crate::cursor::CheckedCursor;
use crate::error::AccessError;

/// A cursor whose current position was proven dereferenceable.
///
/// # Invariants (enforced at construction)
/// - The wrapped cursor is bound.
/// - Its position lies inside the bound half-open range.
///
/// No movement is offered; move the underlying cursor and re-resolve.
#[derive(Debug)]
pub struct ResolvedCursor<'a, T> {
    inner: CheckedCursor<'a, T>,
    element: &'a T,
}

// Manual Clone/Copy: the derive would demand `T: Copy`, but the wrapper
// only copies a cursor and a reference.
impl<'a, T> Clone for ResolvedCursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for ResolvedCursor<'a, T> {}

impl<'a, T> ResolvedCursor<'a, T> {
    /// Validate `cursor`'s current position, capturing the element there.
    ///
    /// Returns the same [`AccessError`] a direct dereference would.
    pub fn new(cursor: CheckedCursor<'a, T>) -> Result<Self, AccessError> {
        let element = cursor.get()?;
        Ok(ResolvedCursor {
            inner: cursor,
            element,
        })
    }

    /// The element at the validated position. Cannot fail; the check
    /// already ran.
    pub fn get(&self) -> &'a T {
        self.element
    }

    /// The validated position, in elements from the lower bound.
    pub fn offset(&self) -> isize {
        self.inner.offset()
    }

    /// The underlying cursor, for further movement.
    pub fn into_cursor(self) -> CheckedCursor<'a, T> {
        self.inner
    }
}
