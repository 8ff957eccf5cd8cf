//! Carpark Conformance Testing Framework
//!
//! Standardized test vectors and conformance runners for the carpark
//! engine. The vectors pin down behavior that must never drift between
//! changes:
//!
//! - **Billing**: the fee table (partial hours round up, exact decimals)
//! - **Allocation**: first-match spot assignment, size compatibility and
//!   capacity errors
//! - **Payment**: settle-then-pay lifecycle and idempotent collection
//!
//! # Usage
//!
//! ```
//! use carpark_conformance::run_all_conformance_tests;
//!
//! let results = run_all_conformance_tests();
//! assert!(results.all_passed(), "{:?}", results.failures());
//! ```

pub mod conformance;
pub mod vectors;

pub use conformance::{ConformanceResult, SuiteResults};
pub use vectors::TestVector;

/// Results of every conformance suite
#[derive(Debug, Clone)]
pub struct AllResults {
    /// Per-suite results
    pub suites: Vec<SuiteResults>,
}

impl AllResults {
    /// Total vectors run
    pub fn total_tests(&self) -> usize {
        self.suites.iter().map(|suite| suite.total).sum()
    }

    /// Total vectors passed
    pub fn total_passed(&self) -> usize {
        self.suites.iter().map(|suite| suite.passed).sum()
    }

    /// Total vectors failed
    pub fn total_failed(&self) -> usize {
        self.suites.iter().map(|suite| suite.failed).sum()
    }

    /// Whether every suite passed
    pub fn all_passed(&self) -> bool {
        self.suites.iter().all(SuiteResults::all_passed)
    }

    /// Failure descriptions across all suites
    pub fn failures(&self) -> Vec<String> {
        self.suites
            .iter()
            .flat_map(|suite| {
                suite
                    .failures()
                    .into_iter()
                    .map(move |failure| format!("{}/{failure}", suite.name))
            })
            .collect()
    }
}

/// Run every conformance suite
pub fn run_all_conformance_tests() -> AllResults {
    AllResults {
        suites: vec![
            conformance::billing::run_conformance_tests(),
            conformance::allocation::run_conformance_tests(),
            conformance::payment::run_conformance_tests(),
        ],
    }
}
