//! Allocation outcomes and pool snapshots.

use serde::{Deserialize, Serialize};

use crate::ticket::Ticket;

use super::kind::PoolKind;

/// Result of asking a pool for a spot.
#[derive(Debug)]
pub enum AllocationResult {
    /// A spot was occupied and this ticket now holds it.
    Granted(Ticket),
    /// No free spot fits the vehicle. Nothing changed.
    Denied {
        /// Reason for denial.
        reason: String,
    },
}

impl AllocationResult {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    pub fn into_ticket(self) -> Option<Ticket> {
        match self {
            Self::Granted(ticket) => Some(ticket),
            Self::Denied { .. } => None,
        }
    }
}

/// Point-in-time snapshot of one pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStatus {
    /// Floor the pool belongs to.
    pub floor: String,
    /// Pool kind.
    pub kind: PoolKind,
    /// Spots in the pool.
    pub total: u32,
    /// Spots currently held by a ticket.
    pub occupied: u32,
    /// Free spots.
    pub available: u32,
}

impl PoolStatus {
    /// Occupancy as a percentage; an empty pool reports 0.
    pub fn usage_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.occupied) * 100.0 / f64::from(self.total)
        }
    }
}
