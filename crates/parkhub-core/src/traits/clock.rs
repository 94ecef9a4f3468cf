//! Monotonic time source used for hold-duration measurement.

use std::fmt;
use std::time::Instant;

/// A monotonic clock.
///
/// Tickets record the instant they were issued and are billed against a
/// later reading of the same clock, so implementations must never go
/// backwards. Tests inject a manually advanced clock to make billing
/// deterministic.
pub trait Clock: Send + Sync + fmt::Debug + 'static {
    /// Current instant.
    fn now(&self) -> Instant;
}
