//! Pricing policy consumed by the settlement service.

use std::fmt;

/// Computes the charge for a stay.
///
/// `hold_units` is the number of started billing hours and is always at
/// least 1. Implementations must be pure and return a non-negative amount.
pub trait PricingStrategy: Send + Sync + fmt::Debug + 'static {
    /// Charge for `hold_units` billing hours.
    fn calculate(&self, hold_units: u64) -> f64;
}
