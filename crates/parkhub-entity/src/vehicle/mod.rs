//! Vehicle entities.

pub mod category;
pub mod model;

pub use category::VehicleType;
pub use model::Vehicle;
