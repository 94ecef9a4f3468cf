//! Payment entities.

pub mod mode;

pub use mode::PaymentMode;
