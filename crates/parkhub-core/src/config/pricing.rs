//! Hourly tariff configuration.

use serde::{Deserialize, Serialize};

/// Tiered hourly tariff.
///
/// The first started hour costs `first_hour`; the next `mid_hours` hours
/// cost `mid_rate` each; every hour after that costs `long_rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat charge for the first hour.
    #[serde(default = "default_first_hour")]
    pub first_hour: f64,
    /// Rate for each hour in the middle tier.
    #[serde(default = "default_mid_rate")]
    pub mid_rate: f64,
    /// Number of hours billed at `mid_rate`.
    #[serde(default = "default_mid_hours")]
    pub mid_hours: u64,
    /// Rate for every hour past the middle tier.
    #[serde(default = "default_long_rate")]
    pub long_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            first_hour: default_first_hour(),
            mid_rate: default_mid_rate(),
            mid_hours: default_mid_hours(),
            long_rate: default_long_rate(),
        }
    }
}

fn default_first_hour() -> f64 {
    4.0
}

fn default_mid_rate() -> f64 {
    3.5
}

fn default_mid_hours() -> u64 {
    2
}

fn default_long_rate() -> f64 {
    2.5
}
