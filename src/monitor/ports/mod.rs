//! Port contracts for the monitor inventory.

mod store;

pub use store::{MonitorStore, MonitorStoreError, MonitorStoreResult};
