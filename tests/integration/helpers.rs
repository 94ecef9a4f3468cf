//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use parkhub_alloc::{MockClock, Ticket};
use parkhub_core::config::{FloorLayout, LayoutConfig};
use parkhub_entity::{Vehicle, VehicleType};
use parkhub_service::{HourlyPricing, ParkingLot};

/// A lot driven by a mock clock.
pub struct TestLot {
    /// The lot under test
    pub lot: Arc<ParkingLot>,
    /// Clock shared with every pool in the lot
    pub clock: MockClock,
}

impl TestLot {
    /// Build a lot from explicit floors
    pub async fn new(floors: Vec<FloorLayout>) -> Self {
        let clock = MockClock::new();
        let lot = ParkingLot::from_layout(
            &LayoutConfig { floors },
            Arc::new(HourlyPricing::default()),
            Arc::new(clock.clone()),
        )
        .await
        .expect("Failed to build test lot");

        Self {
            lot: Arc::new(lot),
            clock,
        }
    }

    /// The default two-floor layout
    pub async fn standard() -> Self {
        Self::new(LayoutConfig::default().floors).await
    }

    /// Park and unwrap the ticket
    pub async fn park(&self, vehicle: &Vehicle) -> Ticket {
        self.lot
            .park_anywhere(vehicle)
            .await
            .expect("Park request failed")
            .into_ticket()
            .unwrap_or_else(|| panic!("No space for {}", vehicle.number))
    }

    /// Free spots across the lot
    pub async fn available(&self) -> u32 {
        self.lot.status().await.iter().map(|f| f.available()).sum()
    }

    /// Occupied spots across the lot
    pub async fn occupied(&self) -> u32 {
        self.lot.status().await.iter().map(|f| f.occupied()).sum()
    }
}

/// A single floor with the given spot counts
pub fn floor(name: &str, motorcycle: u32, compact: u32, electric: u32, large: u32) -> FloorLayout {
    FloorLayout {
        name: name.to_string(),
        motorcycle,
        compact,
        electric,
        large,
    }
}

pub fn car(n: u32) -> Vehicle {
    Vehicle::new(format!("CAR-{n}"), VehicleType::Car)
}

pub fn bike(n: u32) -> Vehicle {
    Vehicle::new(format!("BIKE-{n}"), VehicleType::Motorcycle)
}

pub fn ev(n: u32) -> Vehicle {
    Vehicle::new(format!("EV-{n}"), VehicleType::Electric)
}

pub fn truck(n: u32) -> Vehicle {
    Vehicle::new(format!("TRUCK-{n}"), VehicleType::Truck)
}

pub fn van(n: u32) -> Vehicle {
    Vehicle::new(format!("VAN-{n}"), VehicleType::Van)
}
