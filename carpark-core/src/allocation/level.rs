//! Parking levels.

use serde::{Deserialize, Serialize};

use super::spot::{Spot, SpotSnapshot};
use crate::config::LevelLayout;
use crate::types::VehicleCategory;

/// One floor of the facility, owning a fixed ordered list of spots.
///
/// Spots are created smallest category first and numbered from 1 within the
/// level. Searches walk the spots in creation order, so ties between equally
/// suitable spots always break by physical spot order.
#[derive(Debug)]
pub struct Level {
    level_number: u32,
    spots: Vec<Spot>,
}

impl Level {
    pub(crate) fn new(level_number: u32, layout: &LevelLayout) -> Self {
        let mut spots = Vec::with_capacity(layout.total());
        let mut spot_number = 1u32;
        for (count, category) in [
            (layout.compact_spots, VehicleCategory::Compact),
            (layout.standard_spots, VehicleCategory::Standard),
            (layout.oversized_spots, VehicleCategory::Oversized),
        ] {
            for _ in 0..count {
                spots.push(Spot::new(spot_number, level_number, category.unit_size()));
                spot_number += 1;
            }
        }
        Self {
            level_number,
            spots,
        }
    }

    /// Level number, starting at 1
    pub fn level_number(&self) -> u32 {
        self.level_number
    }

    /// All spots in creation order
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// First free spot that fits `category`, in creation order
    pub fn find_free_compatible(&self, category: VehicleCategory) -> Option<&Spot> {
        self.spots
            .iter()
            .find(|spot| spot.is_free() && spot.fits(category))
    }

    /// All size-compatible spots in creation order, free or not.
    ///
    /// The admission walk probes these one by one, so a spot lost to a
    /// concurrent admission is simply skipped in favor of the next candidate.
    pub fn compatible_spots(
        &self,
        category: VehicleCategory,
    ) -> impl Iterator<Item = &Spot> {
        self.spots.iter().filter(move |spot| spot.fits(category))
    }

    /// Number of currently free spots
    pub fn available_count(&self) -> usize {
        self.spots.iter().filter(|spot| spot.is_free()).count()
    }

    /// Total number of spots
    pub fn total_count(&self) -> usize {
        self.spots.len()
    }

    /// Serializable point-in-time view of the level
    pub fn status(&self) -> LevelStatus {
        LevelStatus {
            level_number: self.level_number,
            total_spots: self.total_count(),
            available_spots: self.available_count(),
            spots: self.spots.iter().map(Spot::snapshot).collect(),
        }
    }
}

/// Point-in-time view of a level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelStatus {
    /// Level number
    pub level_number: u32,
    /// Total spots on the level
    pub total_spots: usize,
    /// Free spots at snapshot time
    pub available_spots: usize,
    /// Per-spot views in creation order
    pub spots: Vec<SpotSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vehicle;

    fn create_test_level() -> Level {
        // 1 compact, 2 standard, 1 oversized
        Level::new(1, &LevelLayout::new(1, 2, 1))
    }

    #[test]
    fn test_spots_created_smallest_first_numbered_from_one() {
        let level = create_test_level();
        let sizes: Vec<u8> = level.spots().iter().map(Spot::unit_size).collect();
        assert_eq!(sizes, vec![1, 2, 2, 3]);
        let numbers: Vec<u32> = level.spots().iter().map(Spot::spot_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_find_skips_incompatible_spots() {
        let level = create_test_level();
        // First spot is compact (size 1); a standard vehicle must land on
        // spot 2, the first size-2 spot.
        let found = level
            .find_free_compatible(VehicleCategory::Standard)
            .expect("free standard spot");
        assert_eq!(found.spot_number(), 2);
    }

    #[test]
    fn test_first_match_breaks_ties_by_spot_order() {
        let level = create_test_level();
        let bike = Vehicle::compact("KA-01-AB-5678", "Black", "Honda CB Shine");

        // A compact vehicle fits everywhere; the first free spot wins.
        let first = level
            .find_free_compatible(VehicleCategory::Compact)
            .expect("free spot");
        assert_eq!(first.spot_number(), 1);

        assert!(first.try_occupy(&bike));
        let next = level
            .find_free_compatible(VehicleCategory::Compact)
            .expect("free spot");
        assert_eq!(next.spot_number(), 2);
    }

    #[test]
    fn test_counts() {
        let level = create_test_level();
        assert_eq!(level.total_count(), 4);
        assert_eq!(level.available_count(), 4);

        let car = Vehicle::standard("KA-01-AB-1234", "Red", "Honda Accord");
        assert!(level
            .find_free_compatible(car.category)
            .expect("free spot")
            .try_occupy(&car));
        assert_eq!(level.available_count(), 3);
        assert_eq!(level.total_count(), 4);
    }

    #[test]
    fn test_no_compatible_spot_when_all_taken() {
        let level = Level::new(1, &LevelLayout::new(0, 1, 0));
        let car = Vehicle::standard("KA-01-AB-1234", "Red", "Honda Accord");
        assert!(level
            .find_free_compatible(VehicleCategory::Standard)
            .expect("free spot")
            .try_occupy(&car));
        assert!(level.find_free_compatible(VehicleCategory::Standard).is_none());
    }

    #[test]
    fn test_status_snapshot() {
        let level = create_test_level();
        let car = Vehicle::standard("KA-01-AB-1234", "Red", "Honda Accord");
        level
            .find_free_compatible(car.category)
            .expect("free spot")
            .try_occupy(&car);

        let status = level.status();
        assert_eq!(status.level_number, 1);
        assert_eq!(status.total_spots, 4);
        assert_eq!(status.available_spots, 3);
        assert_eq!(
            status.spots[1].occupant_plate.as_ref().map(|p| p.as_str()),
            Some("KA-01-AB-1234")
        );
    }
}
