//! Billing Conformance
//!
//! Runs the fee-table vectors against the engine's billing functions.

use std::time::Instant;

use carpark_core::{billable_hours, session_fee};
use chrono::{Duration, TimeZone, Utc};

use super::{ConformanceResult, SuiteResults};
use crate::vectors::billing;

/// Run all billing conformance vectors
pub fn run_conformance_tests() -> SuiteResults {
    let mut suite = SuiteResults::new("billing");

    for vector in billing::all_vectors() {
        let started = Instant::now();

        let entered_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let exited_at = entered_at + Duration::seconds(vector.input.session_seconds);

        let hours = billable_hours(entered_at, exited_at);
        let fee = session_fee(hours, vector.input.hourly_rate);

        let result = if hours != vector.expected.hours {
            ConformanceResult::fail(
                &vector.id,
                started.elapsed(),
                format!("expected {} hours, got {hours}", vector.expected.hours),
            )
        } else if fee != vector.expected.fee {
            ConformanceResult::fail(
                &vector.id,
                started.elapsed(),
                format!("expected fee {}, got {fee}", vector.expected.fee),
            )
        } else {
            ConformanceResult::pass(&vector.id, started.elapsed())
        };

        suite.add_result(result);
    }

    suite
}
