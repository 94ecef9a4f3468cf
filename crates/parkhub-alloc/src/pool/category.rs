//! Mutex-guarded spot pool for one family of vehicle types.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use parkhub_core::error::AppError;
use parkhub_core::traits::Clock;
use parkhub_core::types::SpotId;
use parkhub_entity::{SpotKind, Vehicle};

use crate::spot::Spot;
use crate::ticket::Ticket;

use super::allocation::{AllocationResult, PoolStatus};
use super::kind::PoolKind;

/// Spots owned by a pool. Only touched with the pool's lock held.
#[derive(Debug, Default)]
struct InnerState {
    /// Spots in insertion order; the first free fitting spot wins.
    spots: Vec<Spot>,
}

impl InnerState {
    fn total(&self) -> u32 {
        self.spots.len() as u32
    }

    fn available(&self) -> u32 {
        self.spots.iter().filter(|s| s.is_free()).count() as u32
    }
}

/// A pool of spots for one [`PoolKind`].
///
/// `try_acquire` and `release` each run as a single critical section, so
/// a free spot can never be handed to two tickets. The lock is never held
/// across logging or calls into other components.
#[derive(Debug)]
pub struct CategoryPool {
    /// Name of the floor this pool lives on.
    floor: Arc<str>,
    /// Acceptance predicate.
    kind: PoolKind,
    /// Protected spot collection.
    state: Mutex<InnerState>,
    /// Time source stamped on issued tickets.
    clock: Arc<dyn Clock>,
}

impl CategoryPool {
    /// Creates an empty pool.
    pub fn new(floor: impl Into<Arc<str>>, kind: PoolKind, clock: Arc<dyn Clock>) -> Self {
        Self {
            floor: floor.into(),
            kind,
            state: Mutex::new(InnerState::default()),
            clock,
        }
    }

    pub fn kind(&self) -> PoolKind {
        self.kind
    }

    pub fn floor(&self) -> &str {
        &self.floor
    }

    /// Appends a free spot.
    ///
    /// Takes the lock, so spots may be added while traffic is flowing.
    /// A spot kind this pool does not hold is a configuration error.
    pub async fn add_spot(&self, spot_kind: SpotKind) -> Result<SpotId, AppError> {
        if !self.kind.holds(spot_kind) {
            return Err(AppError::configuration(format!(
                "Cannot add a {spot_kind} spot to the {} pool on floor {}",
                self.kind, self.floor
            )));
        }

        let spot = Spot::new(spot_kind);
        let id = spot.id();
        let total = {
            let mut state = self.state.lock().await;
            state.spots.push(spot);
            state.total()
        };

        info!(
            floor = %self.floor,
            pool = %self.kind,
            spot_kind = %spot_kind,
            spot_id = %id,
            total = total,
            "Spot added"
        );

        Ok(id)
    }

    /// Atomically finds the first free spot that fits `vehicle`, occupies
    /// it, and issues a ticket bound to it.
    ///
    /// Returns [`AllocationResult::Denied`] when no spot fits; the pool is
    /// left untouched in that case. A vehicle type outside this pool's
    /// acceptance set is a configuration error, never a denial.
    pub async fn try_acquire(&self, vehicle: &Vehicle) -> Result<AllocationResult, AppError> {
        let vehicle_type = vehicle.vehicle_type;
        if !self.kind.accepts(vehicle_type) {
            return Err(AppError::configuration(format!(
                "The {} pool on floor {} does not serve {vehicle_type} vehicles",
                self.kind, self.floor
            )));
        }

        let entered_at = self.clock.now();
        let mut state = self.state.lock().await;
        let ticket = state
            .spots
            .iter_mut()
            .find(|spot| spot.is_free() && spot.kind().fits(vehicle_type))
            .map(|spot| {
                let ticket = Ticket::issue(
                    vehicle.clone(),
                    Arc::clone(&self.floor),
                    self.kind,
                    spot.id(),
                    spot.kind(),
                    entered_at,
                );
                spot.occupy(ticket.id());
                ticket
            });
        let available = state.available();
        drop(state);

        match ticket {
            Some(ticket) => {
                info!(
                    floor = %self.floor,
                    pool = %self.kind,
                    vehicle = %vehicle.number,
                    spot_id = %ticket.spot_id(),
                    ticket_id = %ticket.id(),
                    available = available,
                    "Spot allocated"
                );
                Ok(AllocationResult::Granted(ticket))
            }
            None => {
                warn!(
                    floor = %self.floor,
                    pool = %self.kind,
                    vehicle = %vehicle.number,
                    available = available,
                    "No spot available"
                );
                Ok(AllocationResult::Denied {
                    reason: format!(
                        "No space for {vehicle_type} {} on floor {}",
                        vehicle.number, self.floor
                    ),
                })
            }
        }
    }

    /// Frees the spot bound to `ticket`.
    ///
    /// The spot is freed only if it is still held by this exact ticket.
    /// Releasing the same ticket twice is reported as a conflict and
    /// changes nothing, even if another ticket has since taken the spot.
    /// A ticket issued by a different pool is a configuration error.
    pub async fn release(&self, ticket: &Ticket) -> Result<(), AppError> {
        if ticket.pool_kind() != self.kind {
            return Err(AppError::configuration(format!(
                "Ticket {} belongs to the {} pool, not the {} pool",
                ticket.id(),
                ticket.pool_kind(),
                self.kind
            )));
        }

        let mut state = self.state.lock().await;
        let outcome = match state.spots.iter_mut().find(|s| s.id() == ticket.spot_id()) {
            None => Err(AppError::configuration(format!(
                "Spot {} is not managed by the {} pool on floor {}",
                ticket.spot_id(),
                self.kind,
                self.floor
            ))),
            Some(spot) if spot.holder() == Some(ticket.id()) => {
                spot.vacate();
                Ok(())
            }
            Some(_) => Err(AppError::conflict(format!(
                "Ticket {} was already released",
                ticket.id()
            ))),
        };
        let available = state.available();
        drop(state);

        match &outcome {
            Ok(()) => info!(
                floor = %self.floor,
                pool = %self.kind,
                vehicle = %ticket.vehicle().number,
                spot_id = %ticket.spot_id(),
                ticket_id = %ticket.id(),
                available = available,
                "Spot released"
            ),
            Err(e) => warn!(
                floor = %self.floor,
                pool = %self.kind,
                ticket_id = %ticket.id(),
                error = %e,
                "Release rejected"
            ),
        }

        outcome
    }

    /// Number of free spots.
    pub async fn available_count(&self) -> u32 {
        self.state.lock().await.available()
    }

    /// Number of occupied spots.
    pub async fn occupied_count(&self) -> u32 {
        let state = self.state.lock().await;
        state.total() - state.available()
    }

    /// Number of spots in the pool.
    pub async fn total_count(&self) -> u32 {
        self.state.lock().await.total()
    }

    /// Consistent snapshot of all counts, taken under one lock acquisition.
    pub async fn status(&self) -> PoolStatus {
        let state = self.state.lock().await;
        let total = state.total();
        let available = state.available();
        PoolStatus {
            floor: self.floor.to_string(),
            kind: self.kind,
            total,
            occupied: total - available,
            available,
        }
    }

    /// One-line human readable status.
    pub async fn describe_status(&self) -> String {
        let status = self.status().await;
        format!(
            "[{} pool] Total: {}, Available: {}",
            self.kind, status.total, status.available
        )
    }

    /// Copy of the spots in allocation order.
    pub async fn spots(&self) -> Vec<Spot> {
        self.state.lock().await.spots.clone()
    }
}
