//! # parkhub-service
//!
//! Front-door services for ParkHub. Services follow constructor injection:
//! the clock and pricing policy are provided at construction time via
//! `Arc` references.

pub mod gate;
pub mod lot;
pub mod payment;
pub mod pricing;

pub use gate::{EntryPanel, ExitPanel};
pub use lot::ParkingLot;
pub use payment::{PaymentService, Receipt};
pub use pricing::HourlyPricing;
