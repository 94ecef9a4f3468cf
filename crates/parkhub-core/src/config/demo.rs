//! Demonstration traffic configuration.

use serde::{Deserialize, Serialize};

/// Number of vehicles of each type sent concurrently by `parkhub demo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Motorcycles.
    #[serde(default = "default_motorcycles")]
    pub motorcycles: u32,
    /// Cars.
    #[serde(default = "default_cars")]
    pub cars: u32,
    /// Electric cars.
    #[serde(default = "default_one")]
    pub electric: u32,
    /// Trucks.
    #[serde(default = "default_one")]
    pub trucks: u32,
    /// Vans.
    #[serde(default = "default_one")]
    pub vans: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            motorcycles: default_motorcycles(),
            cars: default_cars(),
            electric: default_one(),
            trucks: default_one(),
            vans: default_one(),
        }
    }
}

fn default_motorcycles() -> u32 {
    4
}

fn default_cars() -> u32 {
    4
}

fn default_one() -> u32 {
    1
}
