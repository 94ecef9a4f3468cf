//! Ticket lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a ticket still owes payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    /// Issued and unpaid; exit is refused.
    Active,
    /// Settled; exit is allowed.
    Paid,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Paid => write!(f, "paid"),
        }
    }
}
