//! Entry panel: issues tickets.

use tracing::info;

use parkhub_alloc::{AllocationResult, ParkingFloor};
use parkhub_core::error::AppError;
use parkhub_entity::Vehicle;

/// Issues tickets at a floor entrance.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryPanel;

impl EntryPanel {
    pub fn new() -> Self {
        Self
    }

    /// Ask `floor` for a spot.
    ///
    /// A full floor comes back as [`AllocationResult::Denied`]; errors are
    /// reserved for misconfiguration.
    pub async fn issue_ticket(
        &self,
        floor: &ParkingFloor,
        vehicle: &Vehicle,
    ) -> Result<AllocationResult, AppError> {
        let result = floor.park(vehicle).await?;
        if let AllocationResult::Granted(ticket) = &result {
            info!(
                floor = %floor.name(),
                vehicle = %vehicle.number,
                ticket_id = %ticket.id(),
                "Ticket issued"
            );
        }
        Ok(result)
    }
}
