//! Charges a ticket and flips its settled flag.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use parkhub_alloc::Ticket;
use parkhub_core::error::AppError;
use parkhub_core::traits::{Clock, PricingStrategy};
use parkhub_core::types::TicketId;
use parkhub_entity::PaymentMode;

/// Proof of payment.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    /// Ticket that was settled.
    pub ticket_id: TicketId,
    /// Plate of the parked vehicle.
    pub vehicle: String,
    /// Billed hours.
    pub hold_units: u64,
    /// Amount charged.
    pub amount: f64,
    /// Payment mode.
    pub mode: PaymentMode,
    /// When the payment was taken.
    pub paid_at: DateTime<Utc>,
}

/// Computes charges and settles tickets.
#[derive(Debug, Clone)]
pub struct PaymentService {
    /// Pricing policy.
    pricing: Arc<dyn PricingStrategy>,
    /// Clock shared with the pools that issue tickets.
    clock: Arc<dyn Clock>,
}

impl PaymentService {
    /// Creates a new payment service.
    pub fn new(pricing: Arc<dyn PricingStrategy>, clock: Arc<dyn Clock>) -> Self {
        Self { pricing, clock }
    }

    /// Amount owed for `ticket` right now, without settling it.
    pub fn quote(&self, ticket: &Ticket) -> f64 {
        self.pricing
            .calculate(ticket.elapsed_hold_units(self.clock.as_ref()))
    }

    /// Charges `ticket` and marks it settled.
    ///
    /// A ticket can be paid once; a second payment is a conflict and is
    /// not charged.
    pub fn pay(&self, ticket: &Ticket, mode: PaymentMode) -> Result<Receipt, AppError> {
        if ticket.is_settled() {
            return Err(AppError::conflict(format!(
                "Ticket {} is already paid",
                ticket.id()
            )));
        }

        let hold_units = ticket.elapsed_hold_units(self.clock.as_ref());
        let amount = self.pricing.calculate(hold_units);

        if !ticket.mark_settled() {
            return Err(AppError::conflict(format!(
                "Ticket {} was paid concurrently",
                ticket.id()
            )));
        }

        info!(
            ticket_id = %ticket.id(),
            vehicle = %ticket.vehicle().number,
            hold_units = hold_units,
            amount = amount,
            mode = %mode,
            "Ticket paid"
        );

        Ok(Receipt {
            ticket_id: ticket.id(),
            vehicle: ticket.vehicle().number.clone(),
            hold_units,
            amount,
            mode,
            paid_at: Utc::now(),
        })
    }
}
