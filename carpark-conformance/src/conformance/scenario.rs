//! Scenario executor shared by the allocation and payment suites.
//!
//! Drives a fresh facility with a manual clock through the scripted steps
//! of a [`ScenarioInput`] and reports the first divergence from the
//! expected outcomes.

use std::sync::Arc;

use carpark_core::{
    Facility, FacilityConfig, FacilityError, ManualClock, PlateNumber, Vehicle,
};
use chrono::{Duration, TimeZone, Utc};

use crate::vectors::allocation::{ExpectedError, ScenarioInput, ScenarioStep, StepOutcome};

/// Execute a scripted scenario; `Err` carries the first mismatch.
pub(crate) fn execute(input: &ScenarioInput) -> Result<(), String> {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .ok_or("invalid scenario start time")?,
    ));
    let config = FacilityConfig::new(input.levels.clone());
    let facility = Facility::with_clock(config, clock.clone())
        .map_err(|e| format!("facility construction failed: {e}"))?;

    for (index, step) in input.steps.iter().enumerate() {
        run_step(&facility, &clock, step)
            .map_err(|e| format!("step {} failed: {e}", index + 1))?;
    }
    Ok(())
}

fn run_step(
    facility: &Facility,
    clock: &ManualClock,
    step: &ScenarioStep,
) -> Result<(), String> {
    match step {
        ScenarioStep::Advance { minutes } => {
            clock.advance(Duration::minutes(*minutes));
            Ok(())
        }
        ScenarioStep::Admit {
            plate,
            category,
            expect,
        } => {
            let vehicle = Vehicle::new(plate.clone(), *category, "Grey", "Scenario");
            check_admission(facility.admit(vehicle), expect)
        }
        ScenarioStep::Release { plate, expect } => {
            let result = facility.release(&PlateNumber::new(plate.clone()));
            match (result, expect) {
                (Ok(_), StepOutcome::Ok) => Ok(()),
                (Ok(ticket), StepOutcome::Fee { amount }) => {
                    if ticket.fee == *amount {
                        Ok(())
                    } else {
                        Err(format!("expected fee {amount}, got {}", ticket.fee))
                    }
                }
                (Err(err), StepOutcome::Fails(expected)) => check_error(&err, *expected),
                (Ok(ticket), other) => Err(format!(
                    "release succeeded with fee {} but expected {other:?}",
                    ticket.fee
                )),
                (Err(err), other) => {
                    Err(format!("release failed with {err} but expected {other:?}"))
                }
            }
        }
        ScenarioStep::Pay { plate, expect } => {
            let result = facility.pay(&PlateNumber::new(plate.clone()));
            match (result, expect) {
                (Ok(_), StepOutcome::Ok) => Ok(()),
                (
                    Ok(receipt),
                    StepOutcome::Charged {
                        amount,
                        already_paid,
                    },
                ) => {
                    if receipt.amount != *amount {
                        Err(format!(
                            "expected charge {amount}, got {}",
                            receipt.amount
                        ))
                    } else if receipt.already_paid != *already_paid {
                        Err(format!(
                            "expected already_paid={already_paid}, got {}",
                            receipt.already_paid
                        ))
                    } else {
                        Ok(())
                    }
                }
                (Err(err), StepOutcome::Fails(expected)) => check_error(&err, *expected),
                (Ok(receipt), other) => Err(format!(
                    "payment succeeded with {} but expected {other:?}",
                    receipt.amount
                )),
                (Err(err), other) => {
                    Err(format!("payment failed with {err} but expected {other:?}"))
                }
            }
        }
    }
}

fn check_admission(
    result: Result<carpark_core::Ticket, FacilityError>,
    expect: &StepOutcome,
) -> Result<(), String> {
    match (result, expect) {
        (Ok(_), StepOutcome::Ok) => Ok(()),
        (Ok(ticket), StepOutcome::Spot { level, spot }) => {
            if ticket.level_number == *level && ticket.spot_number == *spot {
                Ok(())
            } else {
                Err(format!(
                    "expected spot {level}/{spot}, got {}/{}",
                    ticket.level_number, ticket.spot_number
                ))
            }
        }
        (Err(err), StepOutcome::Fails(expected)) => check_error(&err, *expected),
        (Ok(ticket), other) => Err(format!(
            "admission landed on {}/{} but expected {other:?}",
            ticket.level_number, ticket.spot_number
        )),
        (Err(err), other) => Err(format!(
            "admission failed with {err} but expected {other:?}"
        )),
    }
}

fn check_error(actual: &FacilityError, expected: ExpectedError) -> Result<(), String> {
    let matches = matches!(
        (actual, expected),
        (FacilityError::NoCapacity { .. }, ExpectedError::NoCapacity)
            | (FacilityError::AlreadyParked { .. }, ExpectedError::AlreadyParked)
            | (FacilityError::TicketNotFound { .. }, ExpectedError::TicketNotFound)
            | (FacilityError::NotSettled { .. }, ExpectedError::NotSettled)
    );
    if matches {
        Ok(())
    } else {
        Err(format!("expected {expected:?} error, got: {actual}"))
    }
}
