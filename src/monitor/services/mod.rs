//! Orchestration services for the monitor inventory.

mod inventory;

pub use inventory::{MonitorService, MonitorServiceError, MonitorServiceResult};
