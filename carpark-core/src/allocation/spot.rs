//! Physical parking spots.
//!
//! A spot owns its occupancy state behind its own mutex. `try_occupy` and
//! `release` are the only transitions and each runs atomically, so callers
//! racing for the same free spot resolve to exactly one winner.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::types::{PlateNumber, Vehicle, VehicleCategory};

/// Occupancy status of a spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpotStatus {
    /// No occupant
    Free,
    /// Holds a vehicle
    Occupied,
}

/// Smallest unit of parking capacity.
///
/// Status is derived from the occupant slot: the spot is occupied exactly
/// when an occupant is present. Spots are created once at facility
/// initialization and never destroyed.
#[derive(Debug)]
pub struct Spot {
    spot_number: u32,
    level_number: u32,
    unit_size: u8,
    occupant: Mutex<Option<Vehicle>>,
}

impl Spot {
    pub(crate) fn new(spot_number: u32, level_number: u32, unit_size: u8) -> Self {
        Self {
            spot_number,
            level_number,
            unit_size,
            occupant: Mutex::new(None),
        }
    }

    /// Spot number within its level, starting at 1
    pub fn spot_number(&self) -> u32 {
        self.spot_number
    }

    /// Owning level number
    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    /// Capacity in vehicle units
    pub fn unit_size(&self) -> u8 {
        self.unit_size
    }

    /// Whether a vehicle of `category` physically fits in this spot
    pub fn fits(&self, category: VehicleCategory) -> bool {
        category.unit_size() <= self.unit_size
    }

    /// Whether the spot currently has no occupant
    pub fn is_free(&self) -> bool {
        self.occupant.lock().is_none()
    }

    /// Current occupancy status
    pub fn status(&self) -> SpotStatus {
        if self.is_free() {
            SpotStatus::Free
        } else {
            SpotStatus::Occupied
        }
    }

    /// Cloned snapshot of the current occupant
    pub fn occupant(&self) -> Option<Vehicle> {
        self.occupant.lock().clone()
    }

    /// Take the spot for `vehicle`.
    ///
    /// Succeeds only when the spot is free and the vehicle fits; otherwise
    /// returns `false` with no state change. Of several callers racing for
    /// the same free spot, exactly one sees `true`.
    pub fn try_occupy(&self, vehicle: &Vehicle) -> bool {
        if !self.fits(vehicle.category) {
            return false;
        }
        let mut occupant = self.occupant.lock();
        if occupant.is_some() {
            return false;
        }
        *occupant = Some(vehicle.clone());
        true
    }

    /// Free the spot.
    ///
    /// Fails (returns `false`) when the spot was not occupied; a double
    /// release is a no-op failure, never a panic.
    pub fn release(&self) -> bool {
        self.occupant.lock().take().is_some()
    }

    /// Serializable point-in-time view of the spot
    pub fn snapshot(&self) -> SpotSnapshot {
        let occupant = self.occupant.lock().clone();
        SpotSnapshot {
            spot_number: self.spot_number,
            level_number: self.level_number,
            unit_size: self.unit_size,
            status: if occupant.is_some() {
                SpotStatus::Occupied
            } else {
                SpotStatus::Free
            },
            occupant_plate: occupant.map(|v| v.plate),
        }
    }
}

/// Point-in-time view of a spot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotSnapshot {
    /// Spot number within the level
    pub spot_number: u32,
    /// Owning level number
    pub level_number: u32,
    /// Capacity in vehicle units
    pub unit_size: u8,
    /// Occupancy status at snapshot time
    pub status: SpotStatus,
    /// Plate of the occupant, if any
    pub occupant_plate: Option<PlateNumber>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_spot() -> Spot {
        Spot::new(1, 1, VehicleCategory::Standard.unit_size())
    }

    #[test]
    fn test_occupy_requires_fit() {
        let spot = standard_spot();
        let truck = Vehicle::oversized("KA-01-AB-9999", "White", "Ashok Leyland");
        assert!(!spot.try_occupy(&truck));
        assert!(spot.is_free());
    }

    #[test]
    fn test_smaller_vehicle_fits_larger_spot() {
        let spot = Spot::new(1, 1, VehicleCategory::Oversized.unit_size());
        let bike = Vehicle::compact("KA-01-AB-5678", "Black", "Honda CB Shine");
        assert!(spot.try_occupy(&bike));
        assert_eq!(spot.status(), SpotStatus::Occupied);
        assert_eq!(spot.occupant().unwrap().plate, bike.plate);
    }

    #[test]
    fn test_occupied_spot_rejects_second_vehicle() {
        let spot = standard_spot();
        let first = Vehicle::standard("KA-01-AB-1234", "Red", "Honda Accord");
        let second = Vehicle::standard("KA-01-AB-1235", "Blue", "Toyota Camry");

        assert!(spot.try_occupy(&first));
        assert!(!spot.try_occupy(&second));
        assert_eq!(spot.occupant().unwrap().plate, first.plate);
    }

    #[test]
    fn test_release_then_reoccupy() {
        let spot = standard_spot();
        let first = Vehicle::standard("KA-01-AB-1234", "Red", "Honda Accord");
        let second = Vehicle::standard("KA-01-AB-1235", "Blue", "Toyota Camry");

        assert!(spot.try_occupy(&first));
        assert!(spot.release());
        assert!(spot.try_occupy(&second));
    }

    #[test]
    fn test_double_release_fails_quietly() {
        let spot = standard_spot();
        let vehicle = Vehicle::standard("KA-01-AB-1234", "Red", "Honda Accord");
        assert!(spot.try_occupy(&vehicle));
        assert!(spot.release());
        assert!(!spot.release());
        assert!(spot.is_free());
    }

    #[test]
    fn test_racing_occupiers_have_one_winner() {
        use std::sync::Arc;
        use std::thread;

        let spot = Arc::new(standard_spot());
        let mut handles = Vec::new();
        for i in 0..8 {
            let spot = Arc::clone(&spot);
            handles.push(thread::spawn(move || {
                let vehicle =
                    Vehicle::standard(format!("KA-01-AB-{i:04}"), "Grey", "Toyota Camry");
                spot.try_occupy(&vehicle)
            }));
        }

        let wins = handles
            .into_iter()
            .map(|handle| handle.join().expect("occupier thread panicked"))
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(spot.status(), SpotStatus::Occupied);
    }
}
