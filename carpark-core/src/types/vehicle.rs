//! Vehicle identity and size categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle size category.
///
/// The unit size expresses physical footprint: a spot accepts a vehicle
/// exactly when the spot's unit size is at least the category's unit size,
/// so ordering between categories is significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    /// Motorcycles and similar (1 unit)
    Compact,
    /// Passenger cars (2 units)
    Standard,
    /// Trucks and similar (3 units)
    Oversized,
}

impl VehicleCategory {
    /// Physical footprint in spot units
    pub fn unit_size(&self) -> u8 {
        match self {
            Self::Compact => 1,
            Self::Standard => 2,
            Self::Oversized => 3,
        }
    }

    /// All categories, smallest first
    pub fn all() -> [VehicleCategory; 3] {
        [Self::Compact, Self::Standard, Self::Oversized]
    }

    /// Category name as used in logs and serialized output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Standard => "standard",
            Self::Oversized => "oversized",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// License plate number. Two vehicles with the same plate are the same
/// real-world vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlateNumber(pub String);

impl PlateNumber {
    /// Create a new plate number
    pub fn new(plate: impl Into<String>) -> Self {
        Self(plate.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vehicle presenting at the facility. Immutable value; identity is the
/// plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique plate identifier
    pub plate: PlateNumber,
    /// Size category
    pub category: VehicleCategory,
    /// Descriptive color
    pub color: String,
    /// Descriptive model
    pub model: String,
}

impl Vehicle {
    /// Create a new vehicle
    pub fn new(
        plate: impl Into<String>,
        category: VehicleCategory,
        color: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            plate: PlateNumber::new(plate),
            category,
            color: color.into(),
            model: model.into(),
        }
    }

    /// Compact vehicle (motorcycle class)
    pub fn compact(
        plate: impl Into<String>,
        color: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self::new(plate, VehicleCategory::Compact, color, model)
    }

    /// Standard vehicle (car class)
    pub fn standard(
        plate: impl Into<String>,
        color: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self::new(plate, VehicleCategory::Standard, color, model)
    }

    /// Oversized vehicle (truck class)
    pub fn oversized(
        plate: impl Into<String>,
        color: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self::new(plate, VehicleCategory::Oversized, color, model)
    }
}
