//! Time-based billing: fee computation and the runtime rate table.

pub mod fee;
pub mod rates;

pub use fee::{billable_hours, session_fee};
pub use rates::{default_rates, RateTable};
