//! Lock-free routing from vehicle type to the pool serving it.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use parkhub_core::error::AppError;
use parkhub_core::traits::Clock;
use parkhub_entity::{SpotKind, Vehicle, VehicleType};

use crate::pool::{AllocationResult, CategoryPool, PoolKind};
use crate::ticket::Ticket;

/// Maps each vehicle type to the pool responsible for it.
///
/// The map is immutable once built, so lookups need no lock. Several
/// vehicle types may share one pool instance. `acquire_for` and
/// `release_for` only resolve the pool and hand the request over; they
/// never inspect availability themselves.
#[derive(Debug, Clone, Default)]
pub struct RoutingDirectory {
    routes: HashMap<VehicleType, Arc<CategoryPool>>,
}

/// Builder for custom or partial routing tables.
#[derive(Debug, Default)]
pub struct RoutingDirectoryBuilder {
    routes: HashMap<VehicleType, Arc<CategoryPool>>,
}

impl RoutingDirectoryBuilder {
    /// Route `vehicle_type` to `pool`, replacing any earlier route.
    pub fn route(mut self, vehicle_type: VehicleType, pool: Arc<CategoryPool>) -> Self {
        self.routes.insert(vehicle_type, pool);
        self
    }

    /// Validate and build. Every route must point at a pool that accepts
    /// the routed vehicle type.
    pub fn build(self) -> Result<RoutingDirectory, AppError> {
        for (vehicle_type, pool) in &self.routes {
            if !pool.kind().accepts(*vehicle_type) {
                return Err(AppError::configuration(format!(
                    "Cannot route {vehicle_type} vehicles to the {} pool",
                    pool.kind()
                )));
            }
        }

        Ok(RoutingDirectory {
            routes: self.routes,
        })
    }
}

impl RoutingDirectory {
    pub fn builder() -> RoutingDirectoryBuilder {
        RoutingDirectoryBuilder::default()
    }

    /// One pool per [`PoolKind`], each shared by all vehicle types it accepts.
    pub fn standard(floor: impl Into<Arc<str>>, clock: Arc<dyn Clock>) -> Self {
        let floor = floor.into();
        let mut routes = HashMap::new();

        for kind in PoolKind::ALL {
            let pool = Arc::new(CategoryPool::new(
                Arc::clone(&floor),
                kind,
                Arc::clone(&clock),
            ));
            for vehicle_type in kind.vehicle_types() {
                routes.insert(*vehicle_type, Arc::clone(&pool));
            }
        }

        Self { routes }
    }

    /// Pool responsible for `vehicle_type`.
    pub fn route(&self, vehicle_type: VehicleType) -> Result<&Arc<CategoryPool>, AppError> {
        self.routes.get(&vehicle_type).ok_or_else(|| {
            AppError::configuration(format!("No pool is registered for {vehicle_type} vehicles"))
        })
    }

    /// Forward an entry request to the owning pool.
    pub async fn acquire_for(&self, vehicle: &Vehicle) -> Result<AllocationResult, AppError> {
        let pool = self.route(vehicle.vehicle_type)?;
        debug!(
            vehicle = %vehicle.number,
            vehicle_type = %vehicle.vehicle_type,
            pool = %pool.kind(),
            "Routing entry"
        );
        pool.try_acquire(vehicle).await
    }

    /// Forward a release to the pool that issued `ticket`.
    pub async fn release_for(&self, ticket: &Ticket) -> Result<(), AppError> {
        let pool = self.route(ticket.vehicle().vehicle_type)?;
        debug!(
            ticket_id = %ticket.id(),
            pool = %pool.kind(),
            "Routing release"
        );
        pool.release(ticket).await
    }

    /// Each distinct pool once, in vehicle type order.
    pub fn pools(&self) -> Vec<Arc<CategoryPool>> {
        let mut pools: Vec<Arc<CategoryPool>> = Vec::new();
        for vehicle_type in VehicleType::ALL {
            if let Some(pool) = self.routes.get(&vehicle_type) {
                if !pools.iter().any(|p| Arc::ptr_eq(p, pool)) {
                    pools.push(Arc::clone(pool));
                }
            }
        }
        pools
    }

    /// The routed pool that holds spots of `spot_kind`.
    pub fn pool_for_spot(&self, spot_kind: SpotKind) -> Result<Arc<CategoryPool>, AppError> {
        self.pools()
            .into_iter()
            .find(|pool| pool.kind().holds(spot_kind))
            .ok_or_else(|| {
                AppError::configuration(format!("No pool is registered for {spot_kind} spots"))
            })
    }
}
