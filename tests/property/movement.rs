//! Movement laws: unchecked, total, reversible.

use custos::CheckedCursor;
use proptest::prelude::*;

use super::common::int_block;

// ============================================================================
// STRATEGIES
// ============================================================================

fn block_strategy() -> impl Strategy<Value = Vec<i32>> {
    (1usize..64).prop_map(int_block)
}

fn pos_strategy() -> impl Strategy<Value = isize> {
    -500isize..500
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Movement by any offset never fails and never consults the range.
    #[test]
    fn movement_is_total(
        block in block_strategy(),
        pos in pos_strategy(),
        moves in prop::collection::vec(-300isize..300, 0..32),
    ) {
        let mut p = CheckedCursor::with_pos(&block, pos);
        let mut expected = pos;
        for m in &moves {
            p.advance_by(*m);
            expected = expected.saturating_add(*m);
        }
        prop_assert_eq!(p.offset(), expected);
        prop_assert_eq!(p.bound_len(), Some(block.len()));
    }

    /// `(p + n) - p == n` and `(p - n) + n` is positionally equal to `p`.
    #[test]
    fn offsets_round_trip(
        block in block_strategy(),
        pos in pos_strategy(),
        n in -400isize..400,
    ) {
        let p = CheckedCursor::with_pos(&block, pos);
        prop_assert_eq!((p + n) - p, n);
        prop_assert_eq!((p - n) + n, p);
    }

    /// Compound assignment agrees with the binary operators.
    #[test]
    fn compound_and_binary_offsets_agree(
        block in block_strategy(),
        pos in pos_strategy(),
        n in -400isize..400,
    ) {
        let base = CheckedCursor::with_pos(&block, pos);

        let mut compound = base;
        compound += n;
        prop_assert_eq!(compound, base + n);

        let mut compound = base;
        compound -= n;
        prop_assert_eq!(compound, base - n);
    }

    /// Post-forms return the pre-move position and keep the binding; the
    /// moved cursor matches its pre-form twin.
    #[test]
    fn post_forms_snapshot_and_land_like_pre_forms(
        block in block_strategy(),
        pos in pos_strategy(),
    ) {
        let mut pre_inc = CheckedCursor::with_pos(&block, pos);
        let mut post_inc = CheckedCursor::with_pos(&block, pos);
        pre_inc.advance();
        let snap = post_inc.post_advance();
        prop_assert_eq!(pre_inc, post_inc);
        prop_assert_eq!(snap.offset(), pos);
        prop_assert_eq!(snap.bound_len(), Some(block.len()));

        let mut pre_dec = CheckedCursor::with_pos(&block, pos);
        let mut post_dec = CheckedCursor::with_pos(&block, pos);
        pre_dec.retreat();
        let snap = post_dec.post_retreat();
        prop_assert_eq!(pre_dec, post_dec);
        prop_assert_eq!(snap.offset(), pos);
    }

    /// Distance is the signed difference of positions, antisymmetric.
    #[test]
    fn distance_is_position_difference(
        block in block_strategy(),
        a in pos_strategy(),
        b in pos_strategy(),
    ) {
        let p = CheckedCursor::with_pos(&block, a);
        let q = CheckedCursor::with_pos(&block, b);
        prop_assert_eq!(q - p, b - a);
        prop_assert_eq!(p - q, a - b);
        prop_assert_eq!((q - p) + (p - q), 0);
    }

    /// Ordering and equality follow positions, ignoring the binding.
    #[test]
    fn comparisons_follow_positions(
        block_a in block_strategy(),
        block_b in block_strategy(),
        a in pos_strategy(),
        b in pos_strategy(),
    ) {
        let p = CheckedCursor::with_pos(&block_a, a);
        let q = CheckedCursor::with_pos(&block_b, b);
        prop_assert_eq!(p == q, a == b);
        prop_assert_eq!(p < q, a < b);
        prop_assert!(p == a);
    }
}
