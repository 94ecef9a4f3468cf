//! Routing requests to the pool that owns them.

pub mod directory;
pub mod floor;

pub use directory::{RoutingDirectory, RoutingDirectoryBuilder};
pub use floor::{FloorStatus, ParkingFloor};
