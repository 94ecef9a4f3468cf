//! Spot kinds.

pub mod kind;

pub use kind::SpotKind;
