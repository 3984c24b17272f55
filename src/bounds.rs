// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The bounds-check policy. This is the whole trick, in one function.
//!
//! A cursor's position moves freely - one-before-start, one-past-end,
//! anywhere. What it cannot do is be *dereferenced* there. Every read or
//! write through a cursor funnels into [`check_access`], which either
//! resolves the signed position into a plain element index or refuses with
//! an [`AccessError`] that names the offset it refused.
//!
//! This mirrors raw-pointer semantics (moving past the end is legal,
//! touching memory there is not) with the check placed exactly at the
//! moment of actual access.
//!
//! The same function is extracted into `kani-proofs/` (minus the debug
//! contracts), where Kani proves it panic-free, sound and complete over
//! all inputs.

use crate::error::AccessError;
use crate::verify::contracts;

/// Resolve a signed cursor position against a binding, or refuse.
///
/// `len` is `None` for an unbound cursor, `Some(n)` for a cursor bound to a
/// block of `n` elements. `pos` is the position in elements from the lower
/// bound.
///
/// Returns the validated element index on success. The three outcomes:
///
/// 1. Unbound → [`AccessError::Unbound`], carrying the attempted offset.
/// 2. `pos < 0` or `pos >= len` → [`AccessError::OutOfRange`], carrying the
///    signed distance from the lower bound for diagnostics.
/// 3. Otherwise → `Ok(pos as usize)`.
#[inline]
pub(crate) fn check_access(len: Option<usize>, pos: isize) -> Result<usize, AccessError> {
    let len = match len {
        Some(len) => len,
        None => return Err(AccessError::Unbound { offset: pos }),
    };

    if pos < 0 || pos as usize >= len {
        return Err(AccessError::OutOfRange { offset: pos, len });
    }

    let index = pos as usize;
    contracts::check_resolved_in_range(index, len, pos);
    Ok(index)
}
