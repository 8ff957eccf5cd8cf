//! Test Vectors Module
//!
//! Standardized inputs and expected outputs for deterministic testing of
//! the facility engine. Vectors pin down behavior that must never drift:
//! the fee table, the first-match allocation policy and the payment
//! lifecycle.

pub mod allocation;
pub mod billing;
pub mod payment;

use serde::{Deserialize, Serialize};

/// Test vector pairing an input with its expected outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestVector<I, E> {
    /// Test vector ID
    pub id: String,
    /// Description
    pub description: String,
    /// Input data
    pub input: I,
    /// Expected outcome
    pub expected: E,
    /// Tags for categorization
    pub tags: Vec<String>,
}

impl<I, E> TestVector<I, E> {
    /// Create a new test vector
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        input: I,
        expected: E,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            input,
            expected,
            tags: Vec::new(),
        }
    }

    /// Add tags
    pub fn with_tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(String::from).collect();
        self
    }
}

/// Standard plates for testing
pub mod plates {
    /// First standard car
    pub fn car_1() -> &'static str {
        "KA-01-AB-1234"
    }

    /// Second standard car
    pub fn car_2() -> &'static str {
        "KA-01-AB-1235"
    }

    /// Third standard car
    pub fn car_3() -> &'static str {
        "KA-01-AB-1236"
    }

    /// Motorcycle
    pub fn bike_1() -> &'static str {
        "KA-01-AB-5678"
    }

    /// Truck
    pub fn truck_1() -> &'static str {
        "KA-01-AB-9999"
    }

    /// Plate that is never admitted (for negative testing)
    pub fn ghost() -> &'static str {
        "GHOST-0000"
    }
}
