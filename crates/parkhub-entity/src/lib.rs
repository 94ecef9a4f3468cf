//! # parkhub-entity
//!
//! Domain entities for ParkHub: vehicles and their types, spot kinds,
//! payment modes and ticket status.

pub mod payment;
pub mod spot;
pub mod ticket;
pub mod vehicle;

pub use payment::PaymentMode;
pub use spot::SpotKind;
pub use ticket::TicketStatus;
pub use vehicle::{Vehicle, VehicleType};
