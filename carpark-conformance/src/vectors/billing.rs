//! Billing Test Vectors
//!
//! Pin down the fee table: whole hours with any partial hour rounded up,
//! exact decimal arithmetic, non-positive durations billing nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TestVector;

/// Billing test input: a session length and the hourly rate in force at
/// settlement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingInput {
    /// Session length in seconds
    pub session_seconds: i64,
    /// Hourly rate at settlement time
    pub hourly_rate: Decimal,
}

/// Expected billing outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingExpected {
    /// Billable whole hours
    pub hours: i64,
    /// Resulting fee
    pub fee: Decimal,
}

fn vector(
    id: &str,
    description: &str,
    session_seconds: i64,
    hourly_rate: Decimal,
    hours: i64,
    fee: Decimal,
) -> TestVector<BillingInput, BillingExpected> {
    TestVector::new(
        id,
        description,
        BillingInput {
            session_seconds,
            hourly_rate,
        },
        BillingExpected { hours, fee },
    )
}

/// Get all billing test vectors
pub fn all_vectors() -> Vec<TestVector<BillingInput, BillingExpected>> {
    vec![
        vector(
            "billing-001",
            "one second bills a full hour",
            1,
            Decimal::new(20, 0),
            1,
            Decimal::new(20, 0),
        )
        .with_tags(vec!["rounding", "edge"]),
        vector(
            "billing-002",
            "exactly sixty minutes bills one hour",
            3600,
            Decimal::new(20, 0),
            1,
            Decimal::new(20, 0),
        )
        .with_tags(vec!["rounding"]),
        vector(
            "billing-003",
            "sixty-one minutes bills two hours",
            61 * 60,
            Decimal::new(20, 0),
            2,
            Decimal::new(40, 0),
        )
        .with_tags(vec!["rounding"]),
        vector(
            "billing-004",
            "125 minutes at 20.0/hour bills 60.0",
            125 * 60,
            Decimal::new(20, 0),
            3,
            Decimal::new(60, 0),
        )
        .with_tags(vec!["rounding", "reference"]),
        vector(
            "billing-005",
            "one second past an hour boundary starts a new hour",
            3601,
            Decimal::new(20, 0),
            2,
            Decimal::new(40, 0),
        )
        .with_tags(vec!["rounding", "edge"]),
        vector(
            "billing-006",
            "zero-length session bills nothing",
            0,
            Decimal::new(20, 0),
            0,
            Decimal::ZERO,
        )
        .with_tags(vec!["edge"]),
        vector(
            "billing-007",
            "full day at the oversized rate",
            24 * 3600,
            Decimal::new(30, 0),
            24,
            Decimal::new(720, 0),
        )
        .with_tags(vec!["volume"]),
        vector(
            "billing-008",
            "fractional rate keeps exact decimals",
            30 * 60,
            Decimal::new(1250, 2),
            1,
            Decimal::new(1250, 2),
        )
        .with_tags(vec!["decimal"]),
        vector(
            "billing-009",
            "compact rate applies per hour",
            90 * 60,
            Decimal::new(10, 0),
            2,
            Decimal::new(20, 0),
        )
        .with_tags(vec!["rounding"]),
    ]
}
