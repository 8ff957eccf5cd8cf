//! Allocation Conformance
//!
//! Runs the scripted allocation scenarios against a fresh facility each.

use std::time::Instant;

use super::{scenario, ConformanceResult, SuiteResults};
use crate::vectors::allocation;

/// Run all allocation conformance vectors
pub fn run_conformance_tests() -> SuiteResults {
    let mut suite = SuiteResults::new("allocation");

    for vector in allocation::all_vectors() {
        let started = Instant::now();
        let result = match scenario::execute(&vector.input) {
            Ok(()) => ConformanceResult::pass(&vector.id, started.elapsed()),
            Err(error) => ConformanceResult::fail(&vector.id, started.elapsed(), error),
        };
        suite.add_result(result);
    }

    suite
}
