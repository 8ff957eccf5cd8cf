//! Integration tests for the facility engine: full session flows and the
//! concurrency guarantees. Unit tests belong at the bottom of source files.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use carpark_core::{
    Facility, FacilityConfig, FacilityError, LevelLayout, ManualClock, PlateNumber, TicketStatus,
    Vehicle, VehicleCategory,
};

fn setup(levels: Vec<LevelLayout>) -> (Arc<Facility>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
    ));
    let facility =
        Facility::with_clock(FacilityConfig::new(levels), clock.clone()).expect("valid config");
    (Arc::new(facility), clock)
}

#[test]
fn full_session_lifecycle() {
    let (facility, clock) = setup(vec![LevelLayout::new(5, 10, 3)]);
    let car = Vehicle::standard("KA-01-AB-1234", "Red", "Honda Accord");

    let ticket = facility.admit(car.clone()).unwrap();
    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(facility.available_count(), 17);

    clock.advance(Duration::minutes(95));
    let settled = facility.release(&car.plate).unwrap();
    assert_eq!(settled.status, TicketStatus::Settled);
    assert_eq!(settled.fee, Decimal::new(40, 0));
    assert_eq!(facility.available_count(), 18);

    let receipt = facility.pay(&car.plate).unwrap();
    assert_eq!(receipt.amount, Decimal::new(40, 0));
    assert!(!receipt.already_paid);
    assert!(facility.ticket(&car.plate).unwrap().is_paid());
}

#[test]
fn freed_spot_is_immediately_reusable() {
    let (facility, _clock) = setup(vec![LevelLayout::new(0, 1, 0)]);

    let first = Vehicle::standard("PLATE-A", "Red", "Honda Accord");
    let second = Vehicle::standard("PLATE-B", "Blue", "Toyota Camry");

    let first_ticket = facility.admit(first.clone()).unwrap();
    facility.release(&first.plate).unwrap();

    let second_ticket = facility.admit(second).unwrap();
    assert_eq!(second_ticket.spot_number, first_ticket.spot_number);
    assert_eq!(second_ticket.level_number, first_ticket.level_number);
}

#[test]
fn admission_overflows_to_next_level() {
    let (facility, _clock) = setup(vec![LevelLayout::new(0, 1, 0), LevelLayout::new(0, 1, 0)]);

    let first = facility
        .admit(Vehicle::standard("PLATE-A", "Red", "Honda Accord"))
        .unwrap();
    let second = facility
        .admit(Vehicle::standard("PLATE-B", "Blue", "Toyota Camry"))
        .unwrap();

    assert_eq!(first.level_number, 1);
    assert_eq!(second.level_number, 2);
}

#[test]
fn concurrent_admissions_same_plate_yield_one_ticket() {
    let (facility, _clock) = setup(vec![LevelLayout::new(5, 10, 3)]);
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let facility = Arc::clone(&facility);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let vehicle = Vehicle::standard("KA-01-AB-1234", "Red", "Honda Accord");
                barrier.wait();
                facility.admit(vehicle)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("admit thread panicked"))
        .collect();

    let admitted = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(admitted, 1);
    for result in results.iter().filter(|result| result.is_err()) {
        assert_eq!(
            result.clone().unwrap_err(),
            FacilityError::AlreadyParked {
                plate: PlateNumber::new("KA-01-AB-1234")
            }
        );
    }

    // Exactly one spot was consumed; the losers handed theirs back.
    assert_eq!(facility.available_count(), 17);
    assert_eq!(facility.status().active_tickets, 1);
}

#[test]
fn concurrent_admissions_fill_capacity_exactly() {
    // 3 standard spots, 8 distinct vehicles racing: exactly 3 admitted,
    // the rest fail NoCapacity, and every winner holds a distinct spot.
    let (facility, _clock) = setup(vec![LevelLayout::new(0, 3, 0)]);
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let facility = Arc::clone(&facility);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let vehicle =
                    Vehicle::standard(format!("PLATE-{i:02}"), "Grey", "Toyota Camry");
                barrier.wait();
                facility.admit(vehicle)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("admit thread panicked"))
        .collect();

    let tickets: Vec<_> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
    assert_eq!(tickets.len(), 3);

    let spots: HashSet<(u32, u32)> = tickets
        .iter()
        .map(|t| (t.level_number, t.spot_number))
        .collect();
    assert_eq!(spots.len(), 3, "each winner must hold a distinct spot");

    for result in results.iter().filter(|r| r.is_err()) {
        assert!(matches!(
            result.clone().unwrap_err(),
            FacilityError::NoCapacity {
                category: VehicleCategory::Standard
            }
        ));
    }
    assert_eq!(facility.available_count(), 0);
}

#[test]
fn concurrent_release_and_admit_stay_consistent() {
    let (facility, _clock) = setup(vec![LevelLayout::new(0, 4, 0)]);

    // Fill the level.
    for i in 0..4 {
        facility
            .admit(Vehicle::standard(format!("PARKED-{i}"), "Grey", "Sedan"))
            .unwrap();
    }

    let barrier = Arc::new(Barrier::new(8));
    let mut handles = Vec::new();

    // Four releasers and four fresh admissions race.
    for i in 0..4 {
        let facility = Arc::clone(&facility);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            facility
                .release(&PlateNumber::new(format!("PARKED-{i}")))
                .map(|_| ())
        }));
    }
    for i in 0..4 {
        let facility = Arc::clone(&facility);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let vehicle = Vehicle::standard(format!("FRESH-{i}"), "Blue", "Hatchback");
            // A fresh admission may lose to another fresh admission while
            // releasers are still holding spots; both outcomes are legal.
            match facility.admit(vehicle) {
                Ok(_) | Err(FacilityError::NoCapacity { .. }) => Ok(()),
                Err(other) => Err(other),
            }
        }));
    }

    for handle in handles {
        handle.join().expect("thread panicked").expect("operation failed");
    }

    // Bookkeeping must balance: every occupied spot has an active ticket.
    let status = facility.status();
    assert_eq!(
        status.total_spots - status.available_spots,
        status.active_tickets
    );
}

#[test]
fn concurrent_payments_charge_once() {
    let (facility, clock) = setup(vec![LevelLayout::new(5, 10, 3)]);
    let car = Vehicle::standard("KA-01-AB-1234", "Red", "Honda Accord");
    facility.admit(car.clone()).unwrap();
    clock.advance(Duration::minutes(61));
    facility.release(&car.plate).unwrap();

    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let facility = Arc::clone(&facility);
            let barrier = Arc::clone(&barrier);
            let plate = car.plate.clone();
            thread::spawn(move || {
                barrier.wait();
                facility.pay(&plate)
            })
        })
        .collect();

    let receipts: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("pay thread panicked").expect("pay failed"))
        .collect();

    let fresh_payments = receipts.iter().filter(|r| !r.already_paid).count();
    assert_eq!(fresh_payments, 1);
    for receipt in &receipts {
        assert_eq!(receipt.amount, Decimal::new(40, 0));
    }
}

#[test]
fn oversized_vehicle_never_lands_on_smaller_spot() {
    let (facility, _clock) = setup(vec![LevelLayout::new(2, 2, 1)]);

    let truck = Vehicle::oversized("TRUCK-1", "White", "Ashok Leyland");
    let ticket = facility.admit(truck).unwrap();
    let spot_status = facility.status();
    let spot = &spot_status.levels[0].spots[(ticket.spot_number - 1) as usize];
    assert_eq!(spot.unit_size, 3);

    // With the only size-3 spot taken, further oversized admissions fail
    // even though smaller spots remain free.
    assert!(facility.available_count() > 0);
    assert_eq!(
        facility.admit(Vehicle::oversized("TRUCK-2", "Blue", "Tata Prima")),
        Err(FacilityError::NoCapacity {
            category: VehicleCategory::Oversized
        })
    );
}

#[test]
fn sixty_minutes_bills_one_hour_sixty_one_bills_two() {
    let (facility, clock) = setup(vec![LevelLayout::new(1, 1, 1)]);

    let first = Vehicle::standard("PLATE-A", "Red", "Honda Accord");
    facility.admit(first.clone()).unwrap();
    clock.advance(Duration::minutes(60));
    assert_eq!(
        facility.release(&first.plate).unwrap().fee,
        Decimal::new(20, 0)
    );

    let second = Vehicle::standard("PLATE-B", "Blue", "Toyota Camry");
    facility.admit(second.clone()).unwrap();
    clock.advance(Duration::minutes(61));
    assert_eq!(
        facility.release(&second.plate).unwrap().fee,
        Decimal::new(40, 0)
    );
}
