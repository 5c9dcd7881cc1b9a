//! Monitor aggregate root.

use super::{MonitorId, SerialNumber};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Every monitor attribute except identity.
///
/// Bundles the payload used when inserting a new record and when performing
/// a full-field overwrite of an existing one. Values are accepted as given;
/// negative prices or quantities are not rejected at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorFields {
    serial_number: SerialNumber,
    manufacturer: String,
    price: Decimal,
    quantity: i32,
    diagonal: Decimal,
}

impl MonitorFields {
    /// Creates a field bundle for a monitor record.
    #[must_use]
    pub fn new(
        serial_number: SerialNumber,
        manufacturer: impl Into<String>,
        price: Decimal,
        quantity: i32,
        diagonal: Decimal,
    ) -> Self {
        Self {
            serial_number,
            manufacturer: manufacturer.into(),
            price,
            quantity,
            diagonal,
        }
    }

    /// Returns the serial number.
    #[must_use]
    pub const fn serial_number(&self) -> &SerialNumber {
        &self.serial_number
    }

    /// Returns the manufacturer name.
    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Returns the unit price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the stocked quantity.
    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Returns the screen diagonal in inches.
    #[must_use]
    pub const fn diagonal(&self) -> Decimal {
        self.diagonal
    }
}

/// Monitor inventory record aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monitor {
    id: MonitorId,
    fields: MonitorFields,
}

impl Monitor {
    /// Reconstructs a monitor from persisted storage.
    ///
    /// Only store adapters construct monitors: identity originates from the
    /// store's id assignment on insert.
    #[must_use]
    pub const fn from_persisted(id: MonitorId, fields: MonitorFields) -> Self {
        Self { id, fields }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> MonitorId {
        self.id
    }

    /// Returns the full field bundle.
    #[must_use]
    pub const fn fields(&self) -> &MonitorFields {
        &self.fields
    }

    /// Returns the serial number.
    #[must_use]
    pub const fn serial_number(&self) -> &SerialNumber {
        self.fields.serial_number()
    }

    /// Returns the manufacturer name.
    #[must_use]
    pub fn manufacturer(&self) -> &str {
        self.fields.manufacturer()
    }

    /// Returns the unit price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.fields.price()
    }

    /// Returns the stocked quantity.
    #[must_use]
    pub const fn quantity(&self) -> i32 {
        self.fields.quantity()
    }

    /// Returns the screen diagonal in inches.
    #[must_use]
    pub const fn diagonal(&self) -> Decimal {
        self.fields.diagonal()
    }

    /// Replaces every field except identity.
    ///
    /// Identity is preserved; there are no partial-update semantics.
    pub fn overwrite(&mut self, fields: MonitorFields) {
        self.fields = fields;
    }
}
