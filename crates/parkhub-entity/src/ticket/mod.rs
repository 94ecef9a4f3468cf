//! Ticket status.

pub mod status;

pub use status::TicketStatus;
