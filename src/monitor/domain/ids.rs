//! Identifier types for the monitor domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a monitor record.
///
/// Identifiers are assigned by the store when a record is inserted and are
/// never reassigned or reused by the service layer. The wrapped value maps
/// to the store's `BIGSERIAL` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonitorId(i64);

impl MonitorId {
    /// Creates a monitor identifier from a store-assigned value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the wrapped numeric identifier.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MonitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
