//! The validated-once wrapper from the verify layer.

use custos::{CheckedCursor, ResolvedCursor};

use super::common::{probe_block, scenario_block};

#[test]
fn resolution_is_equivalent_to_a_successful_access() {
    let block = scenario_block();
    for i in 0..10 {
        let p = CheckedCursor::with_pos(&block, i);
        let resolved = ResolvedCursor::new(p).expect("in-range position");
        assert_eq!(resolved.get(), p.get().unwrap());
        assert_eq!(resolved.offset(), i);
    }
}

#[test]
fn resolution_refuses_exactly_what_access_refuses() {
    let block = scenario_block();
    for i in [-2, -1, 10, 11] {
        let p = CheckedCursor::with_pos(&block, i);
        assert_eq!(
            ResolvedCursor::new(p).unwrap_err(),
            p.get().map(|_| ()).unwrap_err()
        );
    }
}

#[test]
fn resolved_element_survives_copies_of_the_wrapper() {
    let probes = probe_block(3);
    let p = CheckedCursor::with_pos(&probes, 1);
    let resolved = ResolvedCursor::new(p).unwrap();
    let copy = resolved;
    assert_eq!(copy.get().serial, 1);
    assert_eq!(resolved.get().serial, 1);
}
