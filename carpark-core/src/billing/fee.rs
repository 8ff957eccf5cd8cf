//! Session fee computation.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Billable whole hours for a session; any partial hour rounds up.
///
/// A one-second session bills a full hour, a session of exactly one hour
/// bills one hour. Non-positive durations bill zero hours.
pub fn billable_hours(entered_at: DateTime<Utc>, exited_at: DateTime<Utc>) -> i64 {
    let seconds = (exited_at - entered_at).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    (seconds + 3599) / 3600
}

/// Fee for `hours` billable hours at `hourly_rate`
pub fn session_fee(hours: i64, hourly_rate: Decimal) -> Decimal {
    Decimal::from(hours) * hourly_rate
}
