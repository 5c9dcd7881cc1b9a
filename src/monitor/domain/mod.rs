//! Domain model for the monitor inventory.
//!
//! The monitor domain models a single stocked display unit: its
//! store-assigned identity, its unique serial number, and its commercial
//! attributes. All infrastructure concerns are kept outside the domain
//! boundary.

mod ids;
mod monitor;
mod serial;

pub use ids::MonitorId;
pub use monitor::{Monitor, MonitorFields};
pub use serial::SerialNumber;
