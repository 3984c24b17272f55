// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary cursor operation sequences.
//!
//! Movement must never panic and never touch memory; every access must
//! agree with a longhand model of the bounds rule. The proptest suite
//! covers the same ground with generated sequences; the fuzzer keeps
//! hammering the corners those distributions undersample.

#![no_main]

use arbitrary::Arbitrary;
use custos::CheckedCursorMut;
use libfuzzer_sys::fuzz_target;

/// One cursor operation, fuzzer-generated.
#[derive(Debug, Arbitrary)]
enum Op {
    Advance,
    Retreat,
    AdvanceBy(i16),
    Get,
    Set(u8),
    At(i16),
    SetAt(i16, u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    size: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let size = (input.size as usize % 64) + 1;
    let mut block: Vec<u8> = vec![0; size];
    let mut model: Vec<u8> = vec![0; size];
    let mut model_pos: isize = 0;

    let mut cursor = CheckedCursorMut::new(&mut block);

    for op in &input.ops {
        match *op {
            Op::Advance => {
                cursor.advance();
                model_pos = model_pos.saturating_add(1);
            }
            Op::Retreat => {
                cursor.retreat();
                model_pos = model_pos.saturating_add(-1);
            }
            Op::AdvanceBy(n) => {
                cursor.advance_by(n as isize);
                model_pos = model_pos.saturating_add(n as isize);
            }
            Op::Get => {
                let expected = in_range(model_pos, size).map(|i| model[i]);
                assert_eq!(cursor.get().ok().copied(), expected);
            }
            Op::Set(v) => {
                let outcome = cursor.set(v);
                match in_range(model_pos, size) {
                    Some(i) => {
                        assert!(outcome.is_ok());
                        model[i] = v;
                    }
                    None => assert!(outcome.is_err()),
                }
            }
            Op::At(i) => {
                let expected = in_range(i as isize, size).map(|i| model[i]);
                assert_eq!(cursor.at(i as isize).ok().copied(), expected);
            }
            Op::SetAt(i, v) => {
                let outcome = cursor.at_mut(i as isize).map(|slot| *slot = v);
                match in_range(i as isize, size) {
                    Some(i) => {
                        assert!(outcome.is_ok());
                        model[i] = v;
                    }
                    None => assert!(outcome.is_err()),
                }
            }
        }

        assert_eq!(cursor.offset(), model_pos);

        if let Err(e) = cursor.get() {
            // Diagnostics always carry the attempted offset.
            assert_eq!(e.offset(), model_pos);
        }
    }

    // The mutable borrow ends with the cursor's last use; the block must
    // match the model exactly.
    assert_eq!(block, model);
});

fn in_range(pos: isize, len: usize) -> Option<usize> {
    if pos >= 0 && (pos as usize) < len {
        Some(pos as usize)
    } else {
        None
    }
}
