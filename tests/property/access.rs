//! Access laws: checked on every path, lazy about everything else.

use custos::{AccessError, CheckedCursor, CheckedCursorMut};
use proptest::prelude::*;

use super::common::int_block;

// ============================================================================
// STRATEGIES
// ============================================================================

fn block_strategy() -> impl Strategy<Value = Vec<i32>> {
    (1usize..64).prop_map(int_block)
}

fn pos_strategy() -> impl Strategy<Value = isize> {
    -200isize..200
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Dereference succeeds for every position in `[0, len)` and fails one
    /// off each edge with the exact offset in the error.
    #[test]
    fn full_span_dereference(block in block_strategy()) {
        let len = block.len();
        for i in 0..len {
            let p = CheckedCursor::with_pos(&block, i as isize);
            prop_assert_eq!(p.get(), Ok(&block[i]));
        }

        let before = CheckedCursor::with_pos(&block, -1);
        prop_assert_eq!(
            before.get(),
            Err(AccessError::OutOfRange { offset: -1, len })
        );
        let past = CheckedCursor::with_pos(&block, len as isize);
        prop_assert_eq!(
            past.get(),
            Err(AccessError::OutOfRange { offset: len as isize, len })
        );
    }

    /// `p.at(i)` behaves exactly like a cursor freshly bound at position
    /// `i` over the same block, wherever `p` currently stands.
    #[test]
    fn indexing_equals_fresh_binding(
        block in block_strategy(),
        pos in pos_strategy(),
        i in -100isize..100,
    ) {
        let roaming = CheckedCursor::with_pos(&block, pos);
        let fresh = CheckedCursor::with_pos(&block, i);
        prop_assert_eq!(roaming.at(i), fresh.get());
    }

    /// Mutable writes land at the checked position and nowhere else.
    #[test]
    fn writes_land_exactly_where_checked(
        size in 1usize..32,
        pos in -40isize..40,
        value in any::<i32>(),
    ) {
        let mut block = int_block(size);
        let reference = int_block(size);

        let outcome = {
            let mut p = CheckedCursorMut::with_pos(&mut block, pos);
            p.set(value)
        };

        if pos >= 0 && (pos as usize) < size {
            prop_assert!(outcome.is_ok());
            for (i, (got, original)) in block.iter().zip(&reference).enumerate() {
                if i as isize == pos {
                    prop_assert_eq!(*got, value);
                } else {
                    prop_assert_eq!(got, original);
                }
            }
        } else {
            prop_assert!(outcome.is_err());
            prop_assert_eq!(&block, &reference);
        }
    }

    /// The shared and mutable cursors refuse identically.
    #[test]
    fn shared_and_mut_policies_agree(
        size in 1usize..32,
        pos in -40isize..40,
    ) {
        let mut block = int_block(size);
        let shared_outcome = CheckedCursor::with_pos(&block, pos).get().map(|v| *v);
        let mut p = CheckedCursorMut::with_pos(&mut block, pos);
        let mut_outcome = p.get_mut().map(|v| *v);
        prop_assert_eq!(shared_outcome, mut_outcome);
    }

    /// Movement never disturbs stored data.
    #[test]
    fn movement_never_touches_memory(
        size in 1usize..32,
        moves in prop::collection::vec(-50isize..50, 0..24),
    ) {
        let mut block = int_block(size);
        let reference = int_block(size);

        {
            let mut p = CheckedCursorMut::new(&mut block);
            for m in &moves {
                p.advance_by(*m);
            }
        }

        prop_assert_eq!(&block, &reference);
    }
}
