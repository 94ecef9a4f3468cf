//! A single allocatable parking spot.

use serde::Serialize;

use parkhub_core::types::{SpotId, TicketId};
use parkhub_entity::SpotKind;

/// One parking spot.
///
/// A spot is occupied exactly when it has a holder. Only the owning
/// [`CategoryPool`](crate::pool::CategoryPool) mutates it, and only while
/// holding its lock; values handed out by the pool are snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spot {
    id: SpotId,
    kind: SpotKind,
    holder: Option<TicketId>,
}

impl Spot {
    pub(crate) fn new(kind: SpotKind) -> Self {
        Self {
            id: SpotId::new(),
            kind,
            holder: None,
        }
    }

    pub fn id(&self) -> SpotId {
        self.id
    }

    pub fn kind(&self) -> SpotKind {
        self.kind
    }

    /// Ticket currently holding this spot.
    pub fn holder(&self) -> Option<TicketId> {
        self.holder
    }

    pub fn is_free(&self) -> bool {
        self.holder.is_none()
    }

    pub(crate) fn occupy(&mut self, ticket: TicketId) {
        debug_assert!(self.holder.is_none(), "spot {} occupied twice", self.id);
        self.holder = Some(ticket);
    }

    pub(crate) fn vacate(&mut self) {
        self.holder = None;
    }
}
