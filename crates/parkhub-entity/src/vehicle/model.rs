//! Vehicle entity.

use serde::{Deserialize, Serialize};

use super::category::VehicleType;

/// A vehicle asking for a spot. The plate number identifies the requester.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    /// Registration plate.
    pub number: String,
    /// Vehicle class used for routing.
    pub vehicle_type: VehicleType,
}

impl Vehicle {
    /// Create a vehicle.
    pub fn new(number: impl Into<String>, vehicle_type: VehicleType) -> Self {
        Self {
            number: number.into(),
            vehicle_type,
        }
    }
}
