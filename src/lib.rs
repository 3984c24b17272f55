// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Run-time range-checked cursors over borrowed element blocks.
//!
//! A [`CheckedCursor`] binds to a caller-owned slice and walks it with
//! pointer arithmetic - increment, decrement, arbitrary signed offsets,
//! distances between cursors. Movement is never range-checked; it is legal
//! to stand one-before-the-start or one-past-the-end, exactly as with raw
//! pointers. What *is* checked is every access: dereferencing or indexing
//! through the cursor runs the bounds policy and fails with a recoverable
//! [`AccessError`] naming the offending offset instead of touching memory
//! outside the binding.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────────┐
//! │  error.rs   │────▶│  bounds.rs   │────▶│ cursor.rs          │
//! │ (AccessError│     │ (check_access│     │ cursor_mut.rs      │
//! │  two kinds) │     │  the policy) │     │ (the cursor types) │
//! └─────────────┘     └──────────────┘     └────────────────────┘
//!        │                   │                       │
//!        ▼                   ▼                       ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         verify/                              │
//! │   (ResolvedCursor - validated-once wrapper; debug contracts  │
//! │    restating the kani-proofs/ theorems)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `harness` module and the `custos` binary are collaborators, not part
//! of the core: a boolean-check convention and a CLI that runs the built-in
//! drills over two demonstration element types.
//!
//! # Usage
//!
//! ```
//! use custos::{AccessError, CheckedCursor};
//!
//! let block = [10, 20, 30];
//! let mut p = CheckedCursor::new(&block);
//!
//! p.advance();
//! assert_eq!(p.get(), Ok(&20));
//!
//! p += 2; // one past the end: legal to stand on...
//! assert_eq!(
//!     p.get(), // ...not to read through
//!     Err(AccessError::OutOfRange { offset: 3, len: 3 })
//! );
//!
//! p.retreat();
//! assert_eq!(p.get(), Ok(&30));
//!
//! // Indexing is anchored to the block start, not the cursor position.
//! assert_eq!(p.at(0), Ok(&10));
//! ```

// Module declarations
mod bounds;
mod cursor;
mod cursor_mut;
mod error;
pub mod harness;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use cursor::CheckedCursor;
pub use cursor_mut::CheckedCursorMut;
pub use error::AccessError;
pub use verify::ResolvedCursor;
