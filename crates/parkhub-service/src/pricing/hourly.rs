//! Tiered hourly tariff.

use parkhub_core::config::PricingConfig;
use parkhub_core::traits::PricingStrategy;

/// Flat first hour, a middle tier, then a cheaper long-stay rate.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPricing {
    config: PricingConfig,
}

impl HourlyPricing {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }
}

impl Default for HourlyPricing {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl PricingStrategy for HourlyPricing {
    fn calculate(&self, hold_units: u64) -> f64 {
        let PricingConfig {
            first_hour,
            mid_rate,
            mid_hours,
            long_rate,
        } = self.config;

        let extra = hold_units.saturating_sub(1);
        let mid = extra.min(mid_hours);
        let long = extra - mid;

        first_hour + mid as f64 * mid_rate + long as f64 * long_rate
    }
}
