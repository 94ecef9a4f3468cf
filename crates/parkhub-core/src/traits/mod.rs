//! Core traits defined in `parkhub-core` and implemented by other crates.

pub mod clock;
pub mod pricing;

pub use clock::Clock;
pub use pricing::PricingStrategy;
