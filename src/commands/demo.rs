//! `parkhub demo`: concurrent arrivals, settlement and departures.

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use futures::future::join_all;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use parkhub_alloc::{AllocationResult, MockClock, SystemClock, Ticket};
use parkhub_core::config::{AppConfig, DemoConfig};
use parkhub_core::error::AppError;
use parkhub_core::traits::Clock;
use parkhub_entity::{PaymentMode, Vehicle, VehicleType};
use parkhub_service::{HourlyPricing, ParkingLot};

use super::pool_rows;

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Simulated parking time before payment, in minutes. Zero uses the
    /// real clock.
    #[arg(long, default_value_t = 0)]
    pub hold_minutes: u64,
}

#[derive(Debug, Serialize, Tabled)]
struct TicketRow {
    #[tabled(rename = "Ticket")]
    ticket: String,
    #[tabled(rename = "Vehicle")]
    vehicle: String,
    #[tabled(rename = "Type")]
    vehicle_type: String,
    #[tabled(rename = "Floor")]
    floor: String,
    #[tabled(rename = "Spot")]
    spot: String,
    #[tabled(rename = "Issued")]
    issued: String,
}

impl From<&Ticket> for TicketRow {
    fn from(ticket: &Ticket) -> Self {
        Self {
            ticket: ticket.id().short(),
            vehicle: ticket.vehicle().number.clone(),
            vehicle_type: ticket.vehicle().vehicle_type.to_string(),
            floor: ticket.floor().to_string(),
            spot: format!("{} {}", ticket.spot_kind(), ticket.spot_id().short()),
            issued: ticket.issued_at().format("%H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Serialize, Tabled)]
struct ReceiptRow {
    #[tabled(rename = "Vehicle")]
    vehicle: String,
    #[tabled(rename = "Hours")]
    hours: u64,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Mode")]
    mode: String,
}

/// Vehicles sent by the demo, with plates like `CAR-3`.
fn arrivals(demo: &DemoConfig) -> Vec<Vehicle> {
    let mut vehicles = Vec::new();
    for vehicle_type in VehicleType::ALL {
        let count = match vehicle_type {
            VehicleType::Motorcycle => demo.motorcycles,
            VehicleType::Car => demo.cars,
            VehicleType::Electric => demo.electric,
            VehicleType::Truck => demo.trucks,
            VehicleType::Van => demo.vans,
        };
        for n in 1..=count {
            vehicles.push(Vehicle::new(
                format!("{}-{n}", vehicle_type.plate_prefix()),
                vehicle_type,
            ));
        }
    }
    vehicles
}

/// Turned-away arrivals are shown in table output only; JSON output stays
/// parseable.
fn denial_notice(reason: &str, format: OutputFormat) -> Option<&str> {
    (format == OutputFormat::Table).then_some(reason)
}

/// Execute the demo command
pub async fn execute(
    args: &DemoArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mock = (args.hold_minutes > 0).then(MockClock::new);
    let clock: Arc<dyn Clock> = match &mock {
        Some(mock) => Arc::new(mock.clone()),
        None => Arc::new(SystemClock),
    };

    let pricing = Arc::new(HourlyPricing::new(config.pricing.clone()));
    let lot = Arc::new(ParkingLot::from_layout(&config.layout, pricing, clock).await?);

    output::print_heading("Initial status", format);
    output::print_list(&pool_rows(&lot.status().await), format);

    let handles = arrivals(&config.demo).into_iter().map(|vehicle| {
        let lot = Arc::clone(&lot);
        tokio::spawn(async move {
            let outcome = lot.park_anywhere(&vehicle).await;
            (vehicle, outcome)
        })
    });

    let mut tickets = Vec::new();
    for joined in join_all(handles).await {
        let (vehicle, outcome) =
            joined.map_err(|e| AppError::internal(format!("Arrival task failed: {e}")))?;
        match outcome? {
            AllocationResult::Granted(ticket) => tickets.push(ticket),
            AllocationResult::Denied { reason } => {
                tracing::warn!(vehicle = %vehicle.number, reason = %reason, "Arrival turned away");
                if let Some(notice) = denial_notice(&reason, format) {
                    output::print_warning(notice);
                }
            }
        }
    }

    output::print_heading("Tickets issued", format);
    let rows: Vec<TicketRow> = tickets.iter().map(TicketRow::from).collect();
    output::print_list(&rows, format);

    output::print_heading("After arrivals", format);
    output::print_list(&pool_rows(&lot.status().await), format);

    if let Some(mock) = &mock {
        mock.advance(Duration::from_secs(args.hold_minutes * 60));
    }

    let mut receipts = Vec::with_capacity(tickets.len());
    for (i, ticket) in tickets.iter().enumerate() {
        let mode = if i % 2 == 0 {
            PaymentMode::Card
        } else {
            PaymentMode::Cash
        };
        let receipt = lot.pay(ticket, mode)?;
        receipts.push(ReceiptRow {
            vehicle: receipt.vehicle,
            hours: receipt.hold_units,
            amount: format!("{:.2}", receipt.amount),
            mode: receipt.mode.to_string(),
        });
    }

    output::print_heading("Payments", format);
    output::print_list(&receipts, format);

    for result in join_all(tickets.iter().map(|ticket| lot.exit(ticket))).await {
        result?;
    }

    output::print_heading("After departures", format);
    output::print_list(&pool_rows(&lot.status().await), format);

    if format == OutputFormat::Table {
        output::print_success(&format!(
            "{} vehicles parked, paid and released",
            tickets.len()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrivals_follow_demo_counts() {
        let demo = DemoConfig {
            motorcycles: 2,
            cars: 1,
            electric: 0,
            trucks: 1,
            vans: 0,
        };
        let plates: Vec<String> = arrivals(&demo).into_iter().map(|v| v.number).collect();
        assert_eq!(plates, vec!["BIKE-1", "BIKE-2", "CAR-1", "TRUCK-1"]);
    }

    #[test]
    fn test_denials_only_noted_in_table_output() {
        let reason = "No space for car CAR-9 on any floor";
        assert_eq!(denial_notice(reason, OutputFormat::Table), Some(reason));
        assert_eq!(denial_notice(reason, OutputFormat::Json), None);
    }
}
