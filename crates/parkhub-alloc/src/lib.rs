//! # parkhub-alloc
//!
//! Concurrent spot allocation. Spots are grouped into [`CategoryPool`]s,
//! each guarded by its own mutex, so vehicles of unrelated categories never
//! wait on each other. A [`RoutingDirectory`] maps vehicle types to pools
//! without any lock of its own; all atomicity lives inside the pools.
//!
//! Running out of spots is an ordinary outcome reported as
//! [`AllocationResult::Denied`]. Asking a pool for a vehicle type it does
//! not serve, or routing a type nobody registered, is a configuration error.

pub mod clock;
pub mod pool;
pub mod routing;
pub mod spot;
pub mod ticket;

pub use clock::{MockClock, SystemClock};
pub use pool::{AllocationResult, CategoryPool, PoolKind, PoolStatus};
pub use routing::{FloorStatus, ParkingFloor, RoutingDirectory, RoutingDirectoryBuilder};
pub use spot::Spot;
pub use ticket::{HOLD_UNIT, Ticket, TicketSummary};
