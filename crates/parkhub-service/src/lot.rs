//! The parking lot: a flat list of floors behind one front door.

use std::sync::Arc;

use tracing::{debug, info};

use parkhub_alloc::{AllocationResult, FloorStatus, ParkingFloor, Ticket};
use parkhub_core::config::LayoutConfig;
use parkhub_core::error::AppError;
use parkhub_core::traits::{Clock, PricingStrategy};
use parkhub_entity::{PaymentMode, Vehicle};

use crate::gate::{EntryPanel, ExitPanel};
use crate::payment::{PaymentService, Receipt};

/// All floors of one lot plus the entry, exit and payment services.
///
/// The lot holds no lock. Floors are fixed after construction and every
/// operation is forwarded to the floor (and from there the pool) that owns
/// the vehicle's category.
#[derive(Debug)]
pub struct ParkingLot {
    /// Floors in the order arrivals try them.
    floors: Vec<Arc<ParkingFloor>>,
    /// Entry panel.
    entry: EntryPanel,
    /// Exit panel.
    exit: ExitPanel,
    /// Settlement, on the same clock as the floors.
    payments: PaymentService,
}

impl ParkingLot {
    /// Creates a lot with no floors.
    pub fn new(pricing: Arc<dyn PricingStrategy>, clock: Arc<dyn Clock>) -> Self {
        Self {
            floors: Vec::new(),
            entry: EntryPanel::new(),
            exit: ExitPanel::new(),
            payments: PaymentService::new(pricing, clock),
        }
    }

    /// Creates a lot and builds every floor described by `layout`.
    pub async fn from_layout(
        layout: &LayoutConfig,
        pricing: Arc<dyn PricingStrategy>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, AppError> {
        layout.validate()?;

        let mut lot = Self::new(pricing, Arc::clone(&clock));
        for floor_layout in &layout.floors {
            let floor = ParkingFloor::from_layout(floor_layout, Arc::clone(&clock)).await?;
            lot.add_floor(floor)?;
        }

        info!(
            floors = lot.floors.len(),
            spots = layout.total_spots(),
            "Parking lot initialized"
        );
        Ok(lot)
    }

    /// Adds a floor. Floor names must be unique.
    pub fn add_floor(&mut self, floor: ParkingFloor) -> Result<Arc<ParkingFloor>, AppError> {
        if self.floors.iter().any(|f| f.name() == floor.name()) {
            return Err(AppError::configuration(format!(
                "Floor '{}' already exists",
                floor.name()
            )));
        }
        let floor = Arc::new(floor);
        self.floors.push(Arc::clone(&floor));
        Ok(floor)
    }

    pub fn floors(&self) -> &[Arc<ParkingFloor>] {
        &self.floors
    }

    pub fn floor(&self, name: &str) -> Result<&Arc<ParkingFloor>, AppError> {
        self.floors
            .iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| AppError::not_found(format!("Floor '{name}' not found")))
    }

    /// Park on a specific floor.
    pub async fn enter(
        &self,
        floor_name: &str,
        vehicle: &Vehicle,
    ) -> Result<AllocationResult, AppError> {
        let floor = self.floor(floor_name)?;
        self.entry.issue_ticket(floor, vehicle).await
    }

    /// Park on the first floor with a fitting free spot.
    pub async fn park_anywhere(&self, vehicle: &Vehicle) -> Result<AllocationResult, AppError> {
        if self.floors.is_empty() {
            return Err(AppError::configuration("Parking lot has no floors"));
        }

        for floor in &self.floors {
            match self.entry.issue_ticket(floor, vehicle).await? {
                granted @ AllocationResult::Granted(_) => return Ok(granted),
                AllocationResult::Denied { .. } => {
                    debug!(floor = %floor.name(), vehicle = %vehicle.number, "Floor full, trying next");
                }
            }
        }

        Ok(AllocationResult::Denied {
            reason: format!(
                "No space for {} {} on any floor",
                vehicle.vehicle_type, vehicle.number
            ),
        })
    }

    /// Amount currently owed for `ticket`.
    pub fn quote(&self, ticket: &Ticket) -> f64 {
        self.payments.quote(ticket)
    }

    /// Settle `ticket`.
    pub fn pay(&self, ticket: &Ticket, mode: PaymentMode) -> Result<Receipt, AppError> {
        self.payments.pay(ticket, mode)
    }

    /// Let the vehicle out through the floor that issued its ticket.
    pub async fn exit(&self, ticket: &Ticket) -> Result<(), AppError> {
        let floor = self.floor(ticket.floor())?;
        self.exit.exit(floor, ticket).await
    }

    pub async fn status(&self) -> Vec<FloorStatus> {
        let mut out = Vec::with_capacity(self.floors.len());
        for floor in &self.floors {
            out.push(floor.status().await);
        }
        out
    }
}
