//! Parking tickets: the record binding a vehicle to the spot it holds.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

use parkhub_core::traits::Clock;
use parkhub_core::types::{SpotId, TicketId};
use parkhub_entity::{SpotKind, TicketStatus, Vehicle};

use crate::pool::PoolKind;

/// Length of one billing unit.
pub const HOLD_UNIT: Duration = Duration::from_secs(60 * 60);

/// A granted, not yet released allocation.
///
/// Tickets are only created by [`CategoryPool::try_acquire`](crate::pool::CategoryPool::try_acquire),
/// inside the same critical section that marks the spot occupied. The
/// settled flag is atomic so payment may happen on a different task than
/// the one that parked.
#[derive(Debug)]
pub struct Ticket {
    id: TicketId,
    vehicle: Vehicle,
    floor: Arc<str>,
    pool: PoolKind,
    spot_id: SpotId,
    spot_kind: SpotKind,
    issued_at: DateTime<Utc>,
    entered_at: Instant,
    settled: AtomicBool,
}

/// Serializable view of a ticket for display.
#[derive(Debug, Clone, Serialize)]
pub struct TicketSummary {
    pub id: TicketId,
    pub vehicle: String,
    pub vehicle_type: parkhub_entity::VehicleType,
    pub floor: String,
    pub spot_kind: SpotKind,
    pub spot_id: SpotId,
    pub issued_at: DateTime<Utc>,
    pub status: TicketStatus,
}

impl Ticket {
    pub(crate) fn issue(
        vehicle: Vehicle,
        floor: Arc<str>,
        pool: PoolKind,
        spot_id: SpotId,
        spot_kind: SpotKind,
        entered_at: Instant,
    ) -> Self {
        Self {
            id: TicketId::new(),
            vehicle,
            floor,
            pool,
            spot_id,
            spot_kind,
            issued_at: Utc::now(),
            entered_at,
            settled: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Name of the floor that issued this ticket.
    pub fn floor(&self) -> &str {
        &self.floor
    }

    pub fn pool_kind(&self) -> PoolKind {
        self.pool
    }

    pub fn spot_id(&self) -> SpotId {
        self.spot_id
    }

    pub fn spot_kind(&self) -> SpotKind {
        self.spot_kind
    }

    /// Wall-clock issue time, for display only.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Time held so far according to `clock`.
    pub fn hold_duration(&self, clock: &dyn Clock) -> Duration {
        clock.now().saturating_duration_since(self.entered_at)
    }

    /// Number of started billing hours.
    ///
    /// Any partial hour counts as a full one and the minimum is 1:
    /// 0s through 59m59s is 1 unit, exactly 60m is 2.
    pub fn elapsed_hold_units(&self, clock: &dyn Clock) -> u64 {
        self.hold_duration(clock).as_secs() / HOLD_UNIT.as_secs() + 1
    }

    /// Mark the ticket paid. Returns `true` only for the call that flipped it.
    pub fn mark_settled(&self) -> bool {
        !self.settled.swap(true, Ordering::AcqRel)
    }

    pub fn is_settled(&self) -> bool {
        self.settled.load(Ordering::Acquire)
    }

    pub fn status(&self) -> TicketStatus {
        if self.is_settled() {
            TicketStatus::Paid
        } else {
            TicketStatus::Active
        }
    }

    pub fn summary(&self) -> TicketSummary {
        TicketSummary {
            id: self.id,
            vehicle: self.vehicle.number.clone(),
            vehicle_type: self.vehicle.vehicle_type,
            floor: self.floor.to_string(),
            spot_kind: self.spot_kind,
            spot_id: self.spot_id,
            issued_at: self.issued_at,
            status: self.status(),
        }
    }
}
