//! Per-category spot pools.
//!
//! Each pool owns its spots behind one mutex. Pools never call into each
//! other, so no task ever holds two pool locks.

pub mod allocation;
pub mod category;
pub mod kind;

pub use allocation::{AllocationResult, PoolStatus};
pub use category::CategoryPool;
pub use kind::PoolKind;
