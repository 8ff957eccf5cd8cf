//! Payment Conformance
//!
//! Runs the settlement and payment lifecycle scenarios.

use std::time::Instant;

use super::{scenario, ConformanceResult, SuiteResults};
use crate::vectors::payment;

/// Run all payment conformance vectors
pub fn run_conformance_tests() -> SuiteResults {
    let mut suite = SuiteResults::new("payment");

    for vector in payment::all_vectors() {
        let started = Instant::now();
        let result = match scenario::execute(&vector.input) {
            Ok(()) => ConformanceResult::pass(&vector.id, started.elapsed()),
            Err(error) => ConformanceResult::fail(&vector.id, started.elapsed(), error),
        };
        suite.add_result(result);
    }

    suite
}
