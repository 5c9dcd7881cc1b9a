//! Diesel row models for monitor record persistence.

use super::schema::monitors;
use diesel::prelude::*;
use rust_decimal::Decimal;

/// Query result row for monitor records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = monitors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MonitorRow {
    /// Store-assigned record identifier.
    pub id: i64,
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

/// Insert model for monitor records.
///
/// Omits `id`; the database assigns it from the table's sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = monitors)]
pub struct NewMonitorRow {
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
