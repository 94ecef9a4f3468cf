//! Parking lot layout configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Layout of the whole lot: a flat list of floors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Floors in the order arrivals should try them.
    #[serde(default = "default_floors")]
    pub floors: Vec<FloorLayout>,
}

/// Spot counts for a single floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorLayout {
    /// Floor name, unique within the lot.
    pub name: String,
    /// Motorcycle spots.
    #[serde(default)]
    pub motorcycle: u32,
    /// Compact spots (cars and electric cars).
    #[serde(default)]
    pub compact: u32,
    /// Electric-only spots.
    #[serde(default)]
    pub electric: u32,
    /// Large spots (trucks and vans).
    #[serde(default)]
    pub large: u32,
}

impl FloorLayout {
    /// Total number of spots on this floor.
    pub fn total_spots(&self) -> u32 {
        self.motorcycle + self.compact + self.electric + self.large
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            floors: default_floors(),
        }
    }
}

impl LayoutConfig {
    /// Check that the layout describes at least one floor and that floor
    /// names are non-empty and unique.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.floors.is_empty() {
            return Err(AppError::configuration(
                "Layout must define at least one floor",
            ));
        }

        let mut seen = HashSet::new();
        for floor in &self.floors {
            if floor.name.trim().is_empty() {
                return Err(AppError::configuration("Floor name must not be empty"));
            }
            if !seen.insert(floor.name.as_str()) {
                return Err(AppError::configuration(format!(
                    "Duplicate floor name '{}'",
                    floor.name
                )));
            }
        }

        Ok(())
    }

    /// Total number of spots across all floors.
    pub fn total_spots(&self) -> u32 {
        self.floors.iter().map(FloorLayout::total_spots).sum()
    }
}

fn default_floors() -> Vec<FloorLayout> {
    vec![
        FloorLayout {
            name: "F1".to_string(),
            motorcycle: 2,
            compact: 2,
            electric: 1,
            large: 1,
        },
        FloorLayout {
            name: "F2".to_string(),
            motorcycle: 1,
            compact: 1,
            electric: 1,
            large: 1,
        },
    ]
}
