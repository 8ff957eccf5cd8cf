//! Conformance Test Module
//!
//! Test execution infrastructure with per-vector and per-suite result
//! tracking.

pub mod allocation;
pub mod billing;
pub mod payment;
pub(crate) mod scenario;

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of running a single test vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceResult {
    /// Test vector ID
    pub vector_id: String,
    /// Whether the vector passed
    pub passed: bool,
    /// Execution time
    pub duration_ms: u64,
    /// Failure reason, if any
    pub error: Option<String>,
}

impl ConformanceResult {
    /// Create a passing result
    pub fn pass(vector_id: impl Into<String>, duration: Duration) -> Self {
        Self {
            vector_id: vector_id.into(),
            passed: true,
            duration_ms: duration.as_millis() as u64,
            error: None,
        }
    }

    /// Create a failing result
    pub fn fail(
        vector_id: impl Into<String>,
        duration: Duration,
        error: impl Into<String>,
    ) -> Self {
        Self {
            vector_id: vector_id.into(),
            passed: false,
            duration_ms: duration.as_millis() as u64,
            error: Some(error.into()),
        }
    }
}

/// Results for one conformance suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResults {
    /// Suite name
    pub name: String,
    /// Total vectors run
    pub total: usize,
    /// Passed vectors
    pub passed: usize,
    /// Failed vectors
    pub failed: usize,
    /// Individual results
    pub results: Vec<ConformanceResult>,
}

impl SuiteResults {
    /// Create empty suite results
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: 0,
            passed: 0,
            failed: 0,
            results: Vec::new(),
        }
    }

    /// Record a vector result
    pub fn add_result(&mut self, result: ConformanceResult) {
        self.total += 1;
        if result.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.results.push(result);
    }

    /// Whether every vector passed
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Failure descriptions for reporting
    pub fn failures(&self) -> Vec<String> {
        self.results
            .iter()
            .filter(|result| !result.passed)
            .map(|result| {
                format!(
                    "{}: {}",
                    result.vector_id,
                    result.error.as_deref().unwrap_or("unknown failure")
                )
            })
            .collect()
    }
}
