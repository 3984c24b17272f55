// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The check-invocation convention.
//!
//! A check is a named, numbered, zero-argument callable returning a boolean
//! success flag, tagged with the element type it exercises. The runner
//! invokes each check, reports per-case outcomes, and aggregates a process
//! exit status: 0 when everything passed, 1 otherwise.
//!
//! The cursor types know nothing about any of this; the harness is a
//! collaborator, not part of the core contract. The built-in suite lives in
//! [`drills`] and is instantiated once per demonstration element type.

pub mod drills;

use serde::Serialize;

/// One runnable check: a boolean-returning callable plus its labels.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    /// Name of the element type the check instantiates the cursor with.
    pub element: &'static str,
    /// Check number within that element's suite.
    pub number: u32,
    /// What the check covers.
    pub name: &'static str,
    /// The check itself. True means pass.
    pub run: fn() -> bool,
}

/// Outcome of a single check.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub element: &'static str,
    pub number: u32,
    pub name: &'static str,
    pub passed: bool,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub cases: Vec<CaseReport>,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    /// True when every case passed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status for this run: 0 all-pass, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Run every check, reporting each case to `observe` as it completes.
pub fn run_with<F>(checks: &[Check], mut observe: F) -> Summary
where
    F: FnMut(&CaseReport),
{
    let mut cases = Vec::with_capacity(checks.len());
    let mut passed = 0;
    let mut failed = 0;

    for check in checks {
        let report = CaseReport {
            element: check.element,
            number: check.number,
            name: check.name,
            passed: (check.run)(),
        };
        if report.passed {
            passed += 1;
        } else {
            failed += 1;
        }
        observe(&report);
        cases.push(report);
    }

    Summary {
        cases,
        passed,
        failed,
    }
}

/// Run every check silently.
pub fn run(checks: &[Check]) -> Summary {
    run_with(checks, |_| {})
}

/// The built-in drill suite, instantiated for `i32` and for
/// [`Probe`](crate::testing::Probe).
pub fn builtin() -> Vec<Check> {
    use crate::testing::Probe;

    vec![
        Check {
            element: "i32",
            number: 1,
            name: "edge excursion",
            run: drills::edge_excursion::<i32>,
        },
        Check {
            element: "i32",
            number: 2,
            name: "indexed access",
            run: drills::indexed_access::<i32>,
        },
        Check {
            element: "i32",
            number: 3,
            name: "movement parity",
            run: drills::movement_parity::<i32>,
        },
        Check {
            element: "Probe",
            number: 1,
            name: "edge excursion",
            run: drills::edge_excursion::<Probe>,
        },
        Check {
            element: "Probe",
            number: 2,
            name: "indexed access",
            run: drills::indexed_access::<Probe>,
        },
        Check {
            element: "Probe",
            number: 3,
            name: "movement parity",
            run: drills::movement_parity::<Probe>,
        },
    ]
}
