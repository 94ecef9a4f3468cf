//! A named floor: a routing directory plus display helpers.

use std::fmt::Write as _;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use parkhub_core::config::FloorLayout;
use parkhub_core::error::AppError;
use parkhub_core::traits::Clock;
use parkhub_core::types::SpotId;
use parkhub_entity::{SpotKind, Vehicle};

use crate::pool::{AllocationResult, PoolStatus};
use crate::ticket::Ticket;

use super::directory::RoutingDirectory;

/// Snapshot of every pool on a floor.
///
/// Each pool is read under its own lock, one after another, so the
/// snapshot is not atomic across pools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorStatus {
    /// Floor name.
    pub name: String,
    /// One entry per distinct pool.
    pub pools: Vec<PoolStatus>,
}

impl FloorStatus {
    pub fn total(&self) -> u32 {
        self.pools.iter().map(|p| p.total).sum()
    }

    pub fn available(&self) -> u32 {
        self.pools.iter().map(|p| p.available).sum()
    }

    pub fn occupied(&self) -> u32 {
        self.pools.iter().map(|p| p.occupied).sum()
    }
}

/// One floor of the lot.
#[derive(Debug)]
pub struct ParkingFloor {
    name: Arc<str>,
    directory: RoutingDirectory,
}

impl ParkingFloor {
    /// An empty floor with the standard pool routing.
    pub fn new(name: impl Into<Arc<str>>, clock: Arc<dyn Clock>) -> Self {
        let name = name.into();
        Self {
            directory: RoutingDirectory::standard(Arc::clone(&name), clock),
            name,
        }
    }

    /// A floor over a custom routing directory.
    pub fn with_directory(name: impl Into<Arc<str>>, directory: RoutingDirectory) -> Self {
        Self {
            name: name.into(),
            directory,
        }
    }

    /// Build a floor and populate it from configuration.
    ///
    /// Electric spots are added ahead of compact ones so first-fit hands
    /// them to electric cars before they spill onto compact spots.
    pub async fn from_layout(layout: &FloorLayout, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        let floor = Self::new(layout.name.as_str(), clock);
        floor.add_spots(SpotKind::Motorcycle, layout.motorcycle).await?;
        floor.add_spots(SpotKind::Electric, layout.electric).await?;
        floor.add_spots(SpotKind::Compact, layout.compact).await?;
        floor.add_spots(SpotKind::Large, layout.large).await?;
        Ok(floor)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &RoutingDirectory {
        &self.directory
    }

    /// Add a spot to whichever pool holds its kind.
    pub async fn add_spot(&self, kind: SpotKind) -> Result<SpotId, AppError> {
        self.directory.pool_for_spot(kind)?.add_spot(kind).await
    }

    /// Add `count` spots of one kind.
    pub async fn add_spots(&self, kind: SpotKind, count: u32) -> Result<(), AppError> {
        if count == 0 {
            return Ok(());
        }
        let pool = self.directory.pool_for_spot(kind)?;
        for _ in 0..count {
            pool.add_spot(kind).await?;
        }
        Ok(())
    }

    /// Park a vehicle on this floor.
    pub async fn park(&self, vehicle: &Vehicle) -> Result<AllocationResult, AppError> {
        self.directory.acquire_for(vehicle).await
    }

    /// Free the spot held by `ticket`.
    pub async fn unpark(&self, ticket: &Ticket) -> Result<(), AppError> {
        self.directory.release_for(ticket).await
    }

    pub async fn status(&self) -> FloorStatus {
        let mut pools = Vec::new();
        for pool in self.directory.pools() {
            pools.push(pool.status().await);
        }
        FloorStatus {
            name: self.name.to_string(),
            pools,
        }
    }

    /// Multi-line human readable status.
    pub async fn describe_status(&self) -> String {
        let mut out = format!("=== {} Status ===\n", self.name);
        for pool in self.directory.pools() {
            let _ = writeln!(out, "{}", pool.describe_status().await);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use crate::pool::{CategoryPool, PoolKind};
    use parkhub_core::error::ErrorKind;
    use parkhub_entity::VehicleType;

    fn clock() -> Arc<dyn Clock> {
        Arc::new(MockClock::new())
    }

    #[tokio::test]
    async fn test_from_layout_populates_pools() {
        let layout = FloorLayout {
            name: "F1".to_string(),
            motorcycle: 2,
            compact: 2,
            electric: 1,
            large: 1,
        };
        let floor = ParkingFloor::from_layout(&layout, clock()).await.unwrap();
        let status = floor.status().await;

        assert_eq!(status.name, "F1");
        assert_eq!(floor.directory().pools().len(), 3);
        assert_eq!(status.total(), 6);
        assert_eq!(status.available(), 6);
        let totals: Vec<(PoolKind, u32)> = status.pools.iter().map(|p| (p.kind, p.total)).collect();
        assert_eq!(
            totals,
            vec![
                (PoolKind::TwoWheeler, 2),
                (PoolKind::FourWheeler, 3),
                (PoolKind::Large, 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_park_and_unpark() {
        let floor = ParkingFloor::new("F1", clock());
        floor.add_spot(SpotKind::Large).await.unwrap();

        let van = Vehicle::new("VAN-1", VehicleType::Van);
        let ticket = floor.park(&van).await.unwrap().into_ticket().unwrap();
        assert_eq!(ticket.floor(), "F1");
        assert_eq!(floor.status().await.occupied(), 1);

        let truck = Vehicle::new("TRUCK-1", VehicleType::Truck);
        assert!(!floor.park(&truck).await.unwrap().is_granted());

        floor.unpark(&ticket).await.unwrap();
        assert_eq!(floor.status().await.occupied(), 0);
        assert!(floor.park(&truck).await.unwrap().is_granted());
    }

    #[tokio::test]
    async fn test_unpark_on_wrong_floor_is_rejected() {
        let first = ParkingFloor::new("F1", clock());
        let second = ParkingFloor::new("F2", clock());
        first.add_spot(SpotKind::Motorcycle).await.unwrap();
        second.add_spot(SpotKind::Motorcycle).await.unwrap();

        let bike = Vehicle::new("BIKE-1", VehicleType::Motorcycle);
        let ticket = first.park(&bike).await.unwrap().into_ticket().unwrap();

        let err = second.unpark(&ticket).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert_eq!(first.status().await.occupied(), 1);
    }

    #[tokio::test]
    async fn test_custom_directory_serves_only_routed_types() {
        let bikes = Arc::new(CategoryPool::new("B1", PoolKind::TwoWheeler, clock()));
        let directory = RoutingDirectory::builder()
            .route(VehicleType::Motorcycle, Arc::clone(&bikes))
            .build()
            .unwrap();
        let floor = ParkingFloor::with_directory("B1", directory);
        floor.add_spot(SpotKind::Motorcycle).await.unwrap();

        let bike = Vehicle::new("BIKE-1", VehicleType::Motorcycle);
        let ticket = floor.park(&bike).await.unwrap().into_ticket().unwrap();
        assert_eq!(ticket.floor(), "B1");
        assert_eq!(bikes.occupied_count().await, 1);

        let err = floor
            .park(&Vehicle::new("CAR-1", VehicleType::Car))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);

        let err = floor.add_spot(SpotKind::Large).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);

        let status = floor.status().await;
        assert_eq!(status.pools.len(), 1);
        assert_eq!(status.total(), 1);
    }

    #[tokio::test]
    async fn test_describe_status_lists_every_pool() {
        let floor = ParkingFloor::new("F2", clock());
        floor.add_spot(SpotKind::Compact).await.unwrap();
        let text = floor.describe_status().await;

        assert!(text.starts_with("=== F2 Status ==="));
        assert!(text.contains("[four-wheeler pool] Total: 1, Available: 1"));
        assert!(text.contains("[two-wheeler pool] Total: 0, Available: 0"));
        assert!(text.contains("[large pool] Total: 0, Available: 0"));
    }
}
