//! The named boundary-walk scenarios, end to end.
//!
//! Each test walks a 10-element block the way a caller hunting for
//! off-by-one bugs would: step over an edge, watch the access fail with the
//! exact offset, step back, watch it recover.

use custos::{AccessError, CheckedCursor, CheckedCursorMut};

use super::common::{scenario_block, SCENARIO_SIZE};

const SIZE: isize = SCENARIO_SIZE as isize;

/// Scenario A: decrement once from the start, dereference fails; increment
/// back, dereference succeeds.
#[test]
fn underrun_then_recover() {
    let block = scenario_block();
    let mut p = CheckedCursor::new(&block);

    p.retreat();
    assert_eq!(
        p.get(),
        Err(AccessError::OutOfRange { offset: -1, len: SCENARIO_SIZE })
    );

    p.advance();
    assert_eq!(p.get(), Ok(&0));
}

/// Scenario B: advance 10 times from the start, dereference fails; one
/// step back, dereference succeeds.
#[test]
fn overrun_then_recover() {
    let block = scenario_block();
    let mut p = CheckedCursor::new(&block);

    for _ in 0..SCENARIO_SIZE {
        p.advance();
    }
    assert_eq!(
        p.get(),
        Err(AccessError::OutOfRange { offset: SIZE, len: SCENARIO_SIZE })
    );

    p.retreat();
    assert_eq!(p.get(), Ok(&9));
}

/// Scenario C: indexes one off each edge fail, indexes on each edge
/// succeed.
#[test]
fn indexed_edges() {
    let block = scenario_block();
    let p = CheckedCursor::new(&block);

    assert_eq!(
        p.at(-1),
        Err(AccessError::OutOfRange { offset: -1, len: SCENARIO_SIZE })
    );
    assert_eq!(
        p.at(SIZE),
        Err(AccessError::OutOfRange { offset: SIZE, len: SCENARIO_SIZE })
    );
    assert_eq!(p.at(0), Ok(&0));
    assert_eq!(p.at(SIZE - 1), Ok(&9));
}

/// Scenario D: a default-constructed cursor fails every access as unbound,
/// and the message reports the attempted offset.
#[test]
fn unbound_reports_attempted_offset() {
    let mut p: CheckedCursor<'_, i32> = CheckedCursor::default();

    assert_eq!(p.get(), Err(AccessError::Unbound { offset: 0 }));
    assert_eq!(p.at(5), Err(AccessError::Unbound { offset: 5 }));

    p += 3;
    let err = p.get().unwrap_err();
    assert_eq!(err, AccessError::Unbound { offset: 3 });
    assert!(err.to_string().contains('3'));
}

/// Scenario E: distance between start and one-past-end is the block size;
/// the cursors are unequal until the laggard catches up.
#[test]
fn distance_and_catch_up() {
    let block = scenario_block();
    let mut p1 = CheckedCursor::new(&block);
    let p2 = CheckedCursor::with_pos(&block, SIZE);

    assert_eq!(p2 - p1, SIZE);
    assert_ne!(p1, p2);

    p1 += SIZE;
    assert_eq!(p1, p2);
    assert_eq!(p2 - p1, 0);
}

/// The writable variant takes the same walk: every step that fails for the
/// shared cursor also fails for writes.
#[test]
fn scenarios_hold_for_writes() {
    let mut block = scenario_block();

    {
        let mut p = CheckedCursorMut::new(&mut block);

        p.retreat();
        assert!(p.set(-7).is_err());
        p.advance();
        assert!(p.set(-7).is_ok());

        p.advance_by(SIZE); // from 0 to one past the end is `SIZE` steps
        assert!(p.set(-8).is_err());
        p.retreat();
        assert!(p.set(-8).is_ok());
    }

    assert_eq!(block[0], -7);
    assert_eq!(block[9], -8);
}
