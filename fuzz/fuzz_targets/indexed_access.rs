// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the absolute-indexing invariant.
//!
//! `p.at(i)` must behave exactly like a cursor freshly bound at position
//! `i` over the same block - the cursor's own wanderings must never leak
//! into indexed access.

#![no_main]

use arbitrary::Arbitrary;
use custos::CheckedCursor;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    block: Vec<u16>,
    wander: Vec<i16>,
    indexes: Vec<i16>,
}

fuzz_target!(|input: Input| {
    if input.block.is_empty() {
        return;
    }

    let mut roaming = CheckedCursor::new(&input.block);
    for step in &input.wander {
        roaming.advance_by(*step as isize);
    }

    for &i in &input.indexes {
        let i = i as isize;
        let fresh = CheckedCursor::with_pos(&input.block, i);
        assert_eq!(roaming.at(i), fresh.get());

        // Failures carry the index as the diagnostic offset.
        if let Err(e) = roaming.at(i) {
            assert_eq!(e.offset(), i);
        }
    }
});
