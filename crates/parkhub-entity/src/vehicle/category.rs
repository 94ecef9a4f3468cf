//! Vehicle type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The class of vehicle requesting a spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    /// Two-wheeled vehicle.
    Motorcycle,
    /// Compact four-wheeled vehicle.
    Car,
    /// Four-wheeled vehicle that needs or can use a charging spot.
    Electric,
    /// Oversized vehicle.
    Truck,
    /// Oversized vehicle.
    Van,
}

impl VehicleType {
    /// Every vehicle type, in a stable order.
    pub const ALL: [VehicleType; 5] = [
        Self::Motorcycle,
        Self::Car,
        Self::Electric,
        Self::Truck,
        Self::Van,
    ];

    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Motorcycle => "motorcycle",
            Self::Car => "car",
            Self::Electric => "electric",
            Self::Truck => "truck",
            Self::Van => "van",
        }
    }

    /// Short uppercase prefix used for generated plate numbers.
    pub fn plate_prefix(&self) -> &'static str {
        match self {
            Self::Motorcycle => "BIKE",
            Self::Car => "CAR",
            Self::Electric => "EV",
            Self::Truck => "TRUCK",
            Self::Van => "VAN",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = parkhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "motorcycle" | "bike" => Ok(Self::Motorcycle),
            "car" => Ok(Self::Car),
            "electric" | "ev" => Ok(Self::Electric),
            "truck" => Ok(Self::Truck),
            "van" => Ok(Self::Van),
            _ => Err(parkhub_core::AppError::validation(format!(
                "Invalid vehicle type: '{s}'. Expected one of: motorcycle, car, electric, truck, van"
            ))),
        }
    }
}
