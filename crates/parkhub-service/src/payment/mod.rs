//! Settlement of tickets.

pub mod service;

pub use service::{PaymentService, Receipt};
