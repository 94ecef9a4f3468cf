//! Pricing policies.

pub mod hourly;

pub use hourly::HourlyPricing;
