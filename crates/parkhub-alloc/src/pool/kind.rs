//! Pool kinds and their acceptance sets.

use serde::{Deserialize, Serialize};
use std::fmt;

use parkhub_entity::{SpotKind, VehicleType};

/// Which family of vehicles a pool serves.
///
/// The kind is the pool's acceptance predicate: a pool only ever hands out
/// spots to the vehicle types listed here, and only holds the spot kinds
/// listed here. Individual spots narrow this further (an electric spot in
/// the four-wheeler pool refuses plain cars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PoolKind {
    /// Motorcycles.
    TwoWheeler,
    /// Cars and electric cars, sharing compact and charging spots.
    FourWheeler,
    /// Trucks and vans.
    Large,
}

impl PoolKind {
    /// Every pool kind, in display order.
    pub const ALL: [PoolKind; 3] = [Self::TwoWheeler, Self::FourWheeler, Self::Large];

    /// Vehicle types this pool serves.
    pub fn vehicle_types(&self) -> &'static [VehicleType] {
        match self {
            Self::TwoWheeler => &[VehicleType::Motorcycle],
            Self::FourWheeler => &[VehicleType::Car, VehicleType::Electric],
            Self::Large => &[VehicleType::Truck, VehicleType::Van],
        }
    }

    /// Spot kinds this pool holds.
    pub fn spot_kinds(&self) -> &'static [SpotKind] {
        match self {
            Self::TwoWheeler => &[SpotKind::Motorcycle],
            Self::FourWheeler => &[SpotKind::Compact, SpotKind::Electric],
            Self::Large => &[SpotKind::Large],
        }
    }

    pub fn accepts(&self, vehicle_type: VehicleType) -> bool {
        self.vehicle_types().contains(&vehicle_type)
    }

    pub fn holds(&self, spot_kind: SpotKind) -> bool {
        self.spot_kinds().contains(&spot_kind)
    }

    /// The pool kind serving a vehicle type.
    pub fn for_vehicle(vehicle_type: VehicleType) -> Self {
        match vehicle_type {
            VehicleType::Motorcycle => Self::TwoWheeler,
            VehicleType::Car | VehicleType::Electric => Self::FourWheeler,
            VehicleType::Truck | VehicleType::Van => Self::Large,
        }
    }

    /// The pool kind holding a spot kind.
    pub fn for_spot(spot_kind: SpotKind) -> Self {
        match spot_kind {
            SpotKind::Motorcycle => Self::TwoWheeler,
            SpotKind::Compact | SpotKind::Electric => Self::FourWheeler,
            SpotKind::Large => Self::Large,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoWheeler => "two-wheeler",
            Self::FourWheeler => "four-wheeler",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
