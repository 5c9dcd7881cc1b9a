//! Externally-visible monitor representation and its domain mapping.

use crate::monitor::domain::{Monitor, MonitorFields, SerialNumber};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transport representation of a monitor record.
///
/// Wire field names are camelCase (`serialNumber`). The `id` is absent on
/// inbound create payloads and populated on every outbound record; any
/// caller-supplied id is ignored when converting to domain fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorDto {
    /// Store-assigned record identifier, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Manufacturer-issued serial number.
    pub serial_number: String,
    /// Manufacturer name.
    pub manufacturer: String,
    /// Unit price.
    pub price: Decimal,
    /// Stocked quantity.
    pub quantity: i32,
    /// Screen diagonal in inches.
    pub diagonal: Decimal,
}

impl MonitorDto {
    /// Converts the transport shape into domain fields, discarding any
    /// caller-supplied id.
    #[must_use]
    pub fn into_fields(self) -> MonitorFields {
        let Self {
            serial_number,
            manufacturer,
            price,
            quantity,
            diagonal,
            ..
        } = self;
        MonitorFields::new(
            SerialNumber::new(serial_number),
            manufacturer,
            price,
            quantity,
            diagonal,
        )
    }
}

impl From<&Monitor> for MonitorDto {
    fn from(monitor: &Monitor) -> Self {
        Self {
            id: Some(monitor.id().into_inner()),
            serial_number: monitor.serial_number().as_str().to_owned(),
            manufacturer: monitor.manufacturer().to_owned(),
            price: monitor.price(),
            quantity: monitor.quantity(),
            diagonal: monitor.diagonal(),
        }
    }
}
