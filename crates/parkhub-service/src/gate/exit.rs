//! Exit panel: releases spots for paid tickets.

use tracing::{info, warn};

use parkhub_alloc::{ParkingFloor, Ticket};
use parkhub_core::error::AppError;

/// Lets paid vehicles out.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitPanel;

impl ExitPanel {
    pub fn new() -> Self {
        Self
    }

    /// Release the spot held by `ticket`.
    ///
    /// An unpaid ticket is refused with a payment-required error and the
    /// spot stays occupied.
    pub async fn exit(&self, floor: &ParkingFloor, ticket: &Ticket) -> Result<(), AppError> {
        if !ticket.is_settled() {
            warn!(
                floor = %floor.name(),
                ticket_id = %ticket.id(),
                vehicle = %ticket.vehicle().number,
                "Exit refused: ticket unpaid"
            );
            return Err(AppError::payment_required(format!(
                "Payment required before exit for ticket {}",
                ticket.id()
            )));
        }

        floor.unpark(ticket).await?;
        info!(
            floor = %floor.name(),
            vehicle = %ticket.vehicle().number,
            "Exit successful"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::gate::EntryPanel;
    use parkhub_alloc::MockClock;
    use parkhub_core::error::ErrorKind;
    use parkhub_entity::{SpotKind, Vehicle, VehicleType};

    async fn parked() -> (ParkingFloor, Ticket) {
        let floor = ParkingFloor::new("F1", Arc::new(MockClock::new()));
        floor.add_spot(SpotKind::Compact).await.unwrap();
        let ticket = EntryPanel::new()
            .issue_ticket(&floor, &Vehicle::new("CAR-1", VehicleType::Car))
            .await
            .unwrap()
            .into_ticket()
            .unwrap();
        (floor, ticket)
    }

    #[tokio::test]
    async fn test_unpaid_exit_is_refused() {
        let (floor, ticket) = parked().await;

        let err = ExitPanel::new().exit(&floor, &ticket).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::PaymentRequired);
        assert_eq!(floor.status().await.occupied(), 1);
        assert!(!ticket.is_settled());
    }

    #[tokio::test]
    async fn test_paid_exit_frees_spot() {
        let (floor, ticket) = parked().await;
        ticket.mark_settled();

        ExitPanel::new().exit(&floor, &ticket).await.unwrap();
        assert_eq!(floor.status().await.occupied(), 0);
    }

    #[tokio::test]
    async fn test_second_exit_reports_conflict() {
        let (floor, ticket) = parked().await;
        ticket.mark_settled();
        let exit = ExitPanel::new();

        exit.exit(&floor, &ticket).await.unwrap();
        let err = exit.exit(&floor, &ticket).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(floor.status().await.available(), 1);
    }
}
