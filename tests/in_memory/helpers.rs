//! Shared fixtures for in-memory integration tests.

use monitor_inventory::monitor::{
    adapters::memory::InMemoryMonitorStore, services::MonitorService, transport::MonitorDto,
};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Service type under test.
pub type TestService = MonitorService<InMemoryMonitorStore>;

/// Builds a service over a fresh in-memory store.
pub fn service() -> TestService {
    MonitorService::new(Arc::new(InMemoryMonitorStore::new()))
}

/// Builds a create payload with the given serial number.
pub fn dto(serial: &str) -> MonitorDto {
    MonitorDto {
        id: None,
        serial_number: serial.to_owned(),
        manufacturer: "Acme".to_owned(),
        price: Decimal::new(19999, 2),
        quantity: 5,
        diagonal: Decimal::new(240, 1),
    }
}
