//! Store port for monitor record persistence.

use crate::monitor::domain::{Monitor, MonitorFields, MonitorId, SerialNumber};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for monitor store operations.
pub type MonitorStoreResult<T> = Result<T, MonitorStoreError>;

/// Monitor record persistence contract.
///
/// The store owns id assignment and is the authoritative enforcer of
/// serial-number uniqueness; callers may pre-check with
/// [`MonitorStore::exists_by_serial_number`], but the constraint surfaced by
/// [`MonitorStore::insert`] and [`MonitorStore::update`] wins under races.
#[async_trait]
pub trait MonitorStore: Send + Sync {
    /// Reports whether any record carries the given serial number.
    async fn exists_by_serial_number(&self, serial: &SerialNumber) -> MonitorStoreResult<bool>;

    /// Finds a monitor record by identifier.
    ///
    /// Returns `None` when no record has the given id.
    async fn find_by_id(&self, id: MonitorId) -> MonitorStoreResult<Option<Monitor>>;

    /// Returns every record in the store.
    ///
    /// Order is implementation-defined and stable only within a single
    /// snapshot read.
    async fn find_all(&self) -> MonitorStoreResult<Vec<Monitor>>;

    /// Inserts a new record, assigning its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorStoreError::DuplicateSerialNumber`] when the serial
    /// number is already held by an existing record.
    async fn insert(&self, fields: &MonitorFields) -> MonitorStoreResult<Monitor>;

    /// Persists a full-field overwrite of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorStoreError::NotFound`] when the id does not exist,
    /// or [`MonitorStoreError::DuplicateSerialNumber`] when the new serial
    /// number collides with a different record.
    async fn update(&self, monitor: &Monitor) -> MonitorStoreResult<()>;

    /// Removes a record permanently.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorStoreError::NotFound`] when the id does not exist.
    async fn delete(&self, id: MonitorId) -> MonitorStoreResult<()>;
}

/// Errors returned by monitor store implementations.
#[derive(Debug, Clone, Error)]
pub enum MonitorStoreError {
    /// A record with the same serial number already exists.
    #[error("duplicate serial number: {0}")]
    DuplicateSerialNumber(SerialNumber),

    /// The record was not found.
    #[error("monitor not found: {0}")]
    NotFound(MonitorId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MonitorStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
