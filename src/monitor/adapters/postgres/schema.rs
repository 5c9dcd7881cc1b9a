//! Diesel schema for monitor record persistence.

diesel::table! {
    /// Monitor inventory records.
    monitors (id) {
        /// Store-assigned record identifier.
        id -> BigInt,
        /// Manufacturer-issued serial number, unique across the table.
        #[max_length = 255]
        serial_number -> Varchar,
        /// Manufacturer name.
        #[max_length = 255]
        manufacturer -> Varchar,
        /// Unit price.
        price -> Numeric,
        /// Stocked quantity.
        quantity -> Integer,
        /// Screen diagonal in inches.
        diagonal -> Numeric,
    }
}
