//! Payment Test Vectors
//!
//! Scenario vectors for the settlement and payment lifecycle: idempotent
//! collection, the no-prepay policy and retrievability of settled tickets
//! after re-admission.

use carpark_core::{LevelLayout, VehicleCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::allocation::{ExpectedError, ScenarioInput, ScenarioStep, StepOutcome};
use super::{plates, TestVector};

fn admit_ok(plate: &str) -> ScenarioStep {
    ScenarioStep::Admit {
        plate: plate.to_string(),
        category: VehicleCategory::Standard,
        expect: StepOutcome::Ok,
    }
}

fn advance(minutes: i64) -> ScenarioStep {
    ScenarioStep::Advance { minutes }
}

fn release_ok(plate: &str) -> ScenarioStep {
    ScenarioStep::Release {
        plate: plate.to_string(),
        expect: StepOutcome::Ok,
    }
}

fn pay(plate: &str, expect: StepOutcome) -> ScenarioStep {
    ScenarioStep::Pay {
        plate: plate.to_string(),
        expect,
    }
}

/// Get all payment test vectors
pub fn all_vectors() -> Vec<TestVector<ScenarioInput, ()>> {
    vec![
        pay_twice_charges_once(),
        pay_unknown_plate(),
        pay_before_release_rejected(),
        settled_ticket_survives_readmission(),
        release_fee_fixed_at_settlement(),
    ]
}

/// Paying twice reports the same amount; only the first call collects.
pub fn pay_twice_charges_once() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "payment-001",
        "payment is idempotent",
        ScenarioInput {
            levels: vec![LevelLayout::new(0, 1, 0)],
            steps: vec![
                admit_ok(plates::car_1()),
                advance(61),
                release_ok(plates::car_1()),
                pay(
                    plates::car_1(),
                    StepOutcome::Charged {
                        amount: Decimal::new(40, 0),
                        already_paid: false,
                    },
                ),
                pay(
                    plates::car_1(),
                    StepOutcome::Charged {
                        amount: Decimal::new(40, 0),
                        already_paid: true,
                    },
                ),
            ],
        },
        (),
    )
    .with_tags(vec!["idempotency", "reference"])
}

/// Paying a plate with no ticket at all fails.
pub fn pay_unknown_plate() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "payment-002",
        "payment without any ticket fails with ticket-not-found",
        ScenarioInput {
            levels: vec![LevelLayout::new(0, 1, 0)],
            steps: vec![pay(
                plates::ghost(),
                StepOutcome::Fails(ExpectedError::TicketNotFound),
            )],
        },
        (),
    )
    .with_tags(vec!["negative", "reference"])
}

/// The fee is not fixed before settlement, so prepayment is rejected.
pub fn pay_before_release_rejected() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "payment-003",
        "payment before release is rejected as not settled",
        ScenarioInput {
            levels: vec![LevelLayout::new(0, 1, 0)],
            steps: vec![
                admit_ok(plates::car_1()),
                pay(
                    plates::car_1(),
                    StepOutcome::Fails(ExpectedError::NotSettled),
                ),
            ],
        },
        (),
    )
    .with_tags(vec!["policy"])
}

/// A settled ticket stays payable after the same vehicle parks again.
pub fn settled_ticket_survives_readmission() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "payment-004",
        "settled ticket stays payable after re-admission",
        ScenarioInput {
            levels: vec![LevelLayout::new(0, 2, 0)],
            steps: vec![
                admit_ok(plates::car_1()),
                advance(60),
                release_ok(plates::car_1()),
                admit_ok(plates::car_1()),
                pay(
                    plates::car_1(),
                    StepOutcome::Charged {
                        amount: Decimal::new(20, 0),
                        already_paid: false,
                    },
                ),
            ],
        },
        (),
    )
    .with_tags(vec!["registry"])
}

/// The fee recorded at release is what payment later collects.
pub fn release_fee_fixed_at_settlement() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "payment-005",
        "release fixes the fee that payment collects",
        ScenarioInput {
            levels: vec![LevelLayout::new(0, 1, 0)],
            steps: vec![
                admit_ok(plates::car_1()),
                advance(125),
                ScenarioStep::Release {
                    plate: plates::car_1().to_string(),
                    expect: StepOutcome::Fee {
                        amount: Decimal::new(60, 0),
                    },
                },
                pay(
                    plates::car_1(),
                    StepOutcome::Charged {
                        amount: Decimal::new(60, 0),
                        already_paid: false,
                    },
                ),
            ],
        },
        (),
    )
    .with_tags(vec!["billing", "reference"])
}
