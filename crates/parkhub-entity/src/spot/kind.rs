//! Physical spot kinds and which vehicles fit them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vehicle::VehicleType;

/// The physical kind of a parking spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotKind {
    /// Fits motorcycles only.
    Motorcycle,
    /// Fits cars and electric cars.
    Compact,
    /// Charging spot, electric cars only.
    Electric,
    /// Fits trucks and vans.
    Large,
}

impl SpotKind {
    /// Every spot kind, in a stable order.
    pub const ALL: [SpotKind; 4] = [Self::Motorcycle, Self::Compact, Self::Electric, Self::Large];

    /// Vehicle types this spot accepts.
    pub fn accepted(&self) -> &'static [VehicleType] {
        match self {
            Self::Motorcycle => &[VehicleType::Motorcycle],
            Self::Compact => &[VehicleType::Car, VehicleType::Electric],
            Self::Electric => &[VehicleType::Electric],
            Self::Large => &[VehicleType::Truck, VehicleType::Van],
        }
    }

    /// Whether a vehicle of the given type can park here.
    pub fn fits(&self, vehicle_type: VehicleType) -> bool {
        self.accepted().contains(&vehicle_type)
    }

    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Motorcycle => "motorcycle",
            Self::Compact => "compact",
            Self::Electric => "electric",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for SpotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
