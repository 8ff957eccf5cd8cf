//! Allocation Test Vectors
//!
//! Scenario vectors driving a facility through admissions and releases,
//! checking spot assignment, the first-match policy and the capacity
//! errors.

use carpark_core::{LevelLayout, VehicleCategory};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{plates, TestVector};

/// A scripted facility scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Level layouts in registration order
    pub levels: Vec<LevelLayout>,
    /// Steps executed in order against a fresh facility
    pub steps: Vec<ScenarioStep>,
}

/// One scripted operation and its expected outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStep {
    /// Move the test clock forward
    Advance { minutes: i64 },
    /// Admit a vehicle
    Admit {
        plate: String,
        category: VehicleCategory,
        expect: StepOutcome,
    },
    /// Release a vehicle by plate
    Release { plate: String, expect: StepOutcome },
    /// Collect payment by plate
    Pay { plate: String, expect: StepOutcome },
}

/// Expected outcome of a scripted operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// Operation succeeds; no further assertion
    Ok,
    /// Admission succeeds and lands on this level/spot
    Spot { level: u32, spot: u32 },
    /// Release succeeds with this fee
    Fee { amount: Decimal },
    /// Payment succeeds with this amount and no-op flag
    Charged {
        amount: Decimal,
        already_paid: bool,
    },
    /// Operation fails with this error kind
    Fails(ExpectedError),
}

/// Error kinds a scenario step may expect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedError {
    NoCapacity,
    AlreadyParked,
    TicketNotFound,
    NotSettled,
}

fn admit(plate: &str, category: VehicleCategory, expect: StepOutcome) -> ScenarioStep {
    ScenarioStep::Admit {
        plate: plate.to_string(),
        category,
        expect,
    }
}

fn release(plate: &str, expect: StepOutcome) -> ScenarioStep {
    ScenarioStep::Release {
        plate: plate.to_string(),
        expect,
    }
}

/// Get all allocation test vectors
pub fn all_vectors() -> Vec<TestVector<ScenarioInput, ()>> {
    vec![
        capacity_with_incompatible_spot_free(),
        smallest_spot_first(),
        cross_level_overflow(),
        duplicate_plate_rejected(),
        release_unknown_plate(),
        oversized_never_downsizes(),
        freed_spot_reused_in_order(),
    ]
}

/// Reference scenario: 1 compact + 2 standard spots. Two standard vehicles
/// fill the level for standard traffic; the compact spot never counts as
/// capacity for them, and a released spot is reusable at once.
pub fn capacity_with_incompatible_spot_free() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "allocation-001",
        "standard vehicles cannot use the free compact spot",
        ScenarioInput {
            levels: vec![LevelLayout::new(1, 2, 0)],
            steps: vec![
                admit(
                    plates::car_1(),
                    VehicleCategory::Standard,
                    StepOutcome::Spot { level: 1, spot: 2 },
                ),
                admit(
                    plates::car_2(),
                    VehicleCategory::Standard,
                    StepOutcome::Spot { level: 1, spot: 3 },
                ),
                admit(
                    plates::car_3(),
                    VehicleCategory::Standard,
                    StepOutcome::Fails(ExpectedError::NoCapacity),
                ),
                release(plates::car_1(), StepOutcome::Ok),
                admit(
                    "KA-01-AB-1237",
                    VehicleCategory::Standard,
                    StepOutcome::Spot { level: 1, spot: 2 },
                ),
            ],
        },
        (),
    )
    .with_tags(vec!["capacity", "reference"])
}

/// A compact vehicle takes the first spot in creation order even though
/// larger spots are free.
pub fn smallest_spot_first() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "allocation-002",
        "first-match walks spots in creation order",
        ScenarioInput {
            levels: vec![LevelLayout::new(1, 1, 1)],
            steps: vec![
                admit(
                    plates::bike_1(),
                    VehicleCategory::Compact,
                    StepOutcome::Spot { level: 1, spot: 1 },
                ),
                admit(
                    "KA-01-AB-5679",
                    VehicleCategory::Compact,
                    StepOutcome::Spot { level: 1, spot: 2 },
                ),
            ],
        },
        (),
    )
    .with_tags(vec!["ordering"])
}

/// When a level is full the search falls through to the next level in
/// registration order.
pub fn cross_level_overflow() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "allocation-003",
        "search overflows to the next level",
        ScenarioInput {
            levels: vec![LevelLayout::new(0, 1, 0), LevelLayout::new(0, 1, 0)],
            steps: vec![
                admit(
                    plates::car_1(),
                    VehicleCategory::Standard,
                    StepOutcome::Spot { level: 1, spot: 1 },
                ),
                admit(
                    plates::car_2(),
                    VehicleCategory::Standard,
                    StepOutcome::Spot { level: 2, spot: 1 },
                ),
                admit(
                    plates::car_3(),
                    VehicleCategory::Standard,
                    StepOutcome::Fails(ExpectedError::NoCapacity),
                ),
            ],
        },
        (),
    )
    .with_tags(vec!["ordering", "capacity"])
}

/// A plate can hold at most one active ticket.
pub fn duplicate_plate_rejected() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "allocation-004",
        "second admission for an active plate is rejected",
        ScenarioInput {
            levels: vec![LevelLayout::new(0, 2, 0)],
            steps: vec![
                admit(plates::car_1(), VehicleCategory::Standard, StepOutcome::Ok),
                admit(
                    plates::car_1(),
                    VehicleCategory::Standard,
                    StepOutcome::Fails(ExpectedError::AlreadyParked),
                ),
            ],
        },
        (),
    )
    .with_tags(vec!["registry"])
}

/// Releasing a plate that never parked fails cleanly.
pub fn release_unknown_plate() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "allocation-005",
        "release without a ticket fails with ticket-not-found",
        ScenarioInput {
            levels: vec![LevelLayout::new(0, 1, 0)],
            steps: vec![release(
                plates::ghost(),
                StepOutcome::Fails(ExpectedError::TicketNotFound),
            )],
        },
        (),
    )
    .with_tags(vec!["registry", "negative"])
}

/// An oversized vehicle only ever lands on a size-3 spot.
pub fn oversized_never_downsizes() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "allocation-006",
        "oversized vehicles never occupy smaller spot classes",
        ScenarioInput {
            levels: vec![LevelLayout::new(2, 2, 1)],
            steps: vec![
                admit(
                    plates::truck_1(),
                    VehicleCategory::Oversized,
                    StepOutcome::Spot { level: 1, spot: 5 },
                ),
                admit(
                    "KA-01-AB-8888",
                    VehicleCategory::Oversized,
                    StepOutcome::Fails(ExpectedError::NoCapacity),
                ),
            ],
        },
        (),
    )
    .with_tags(vec!["compatibility"])
}

/// After a release the freed spot is the first candidate again.
pub fn freed_spot_reused_in_order() -> TestVector<ScenarioInput, ()> {
    TestVector::new(
        "allocation-007",
        "a freed spot is immediately reusable and keeps its place in the walk",
        ScenarioInput {
            levels: vec![LevelLayout::new(0, 3, 0)],
            steps: vec![
                admit(
                    plates::car_1(),
                    VehicleCategory::Standard,
                    StepOutcome::Spot { level: 1, spot: 1 },
                ),
                admit(
                    plates::car_2(),
                    VehicleCategory::Standard,
                    StepOutcome::Spot { level: 1, spot: 2 },
                ),
                release(plates::car_1(), StepOutcome::Ok),
                admit(
                    plates::car_3(),
                    VehicleCategory::Standard,
                    StepOutcome::Spot { level: 1, spot: 1 },
                ),
            ],
        },
        (),
    )
    .with_tags(vec!["reuse"])
}
