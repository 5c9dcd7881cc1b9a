//! Service layer for monitor inventory CRUD operations.
//!
//! Provides [`MonitorService`] which coordinates the monitor store and the
//! transport mapping, translating store failures into the caller-visible
//! error taxonomy.

use crate::monitor::{
    domain::{MonitorId, SerialNumber},
    ports::{MonitorStore, MonitorStoreError},
    transport::MonitorDto,
};
use std::sync::Arc;
use thiserror::Error;

/// Caller-visible errors for monitor inventory operations.
#[derive(Debug, Error)]
pub enum MonitorServiceError {
    /// A monitor with the same serial number already exists.
    #[error("monitor with serial number '{0}' already exists")]
    AlreadyExists(SerialNumber),

    /// No monitor exists with the given identifier.
    #[error("monitor with id {0} not found")]
    NotFound(MonitorId),

    /// The store failed for a reason outside the domain taxonomy
    /// (connectivity and the like); propagated unmodified.
    #[error(transparent)]
    Store(MonitorStoreError),
}

impl From<MonitorStoreError> for MonitorServiceError {
    /// Normalizes store errors into the domain taxonomy.
    ///
    /// Uniqueness violations surface as [`MonitorServiceError::AlreadyExists`]
    /// whether they were caught by the advisory pre-check or by the store's
    /// authoritative constraint at write time; the raw storage error is never
    /// exposed for either trigger.
    fn from(err: MonitorStoreError) -> Self {
        match err {
            MonitorStoreError::DuplicateSerialNumber(serial) => Self::AlreadyExists(serial),
            MonitorStoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Result type for monitor inventory service operations.
pub type MonitorServiceResult<T> = Result<T, MonitorServiceError>;

/// Monitor inventory CRUD orchestration service.
#[derive(Clone)]
pub struct MonitorService<S>
where
    S: MonitorStore,
{
    store: Arc<S>,
}

impl<S> MonitorService<S>
where
    S: MonitorStore,
{
    /// Creates a new monitor inventory service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates a new monitor record.
    ///
    /// Any caller-supplied `id` in the payload is ignored; the store assigns
    /// identity on insert.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorServiceError::AlreadyExists`] when the serial number
    /// is already taken, whether detected by the pre-check or by the store's
    /// constraint under a check-then-write race.
    pub async fn create(&self, input: MonitorDto) -> MonitorServiceResult<MonitorDto> {
        let fields = input.into_fields();

        if self
            .store
            .exists_by_serial_number(fields.serial_number())
            .await?
        {
            return Err(MonitorServiceError::AlreadyExists(
                fields.serial_number().clone(),
            ));
        }

        let monitor = self.store.insert(&fields).await?;
        Ok(MonitorDto::from(&monitor))
    }

    /// Returns the monitor record with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorServiceError::NotFound`] when no record has the id.
    pub async fn read_by_id(&self, id: MonitorId) -> MonitorServiceResult<MonitorDto> {
        let monitor = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(MonitorServiceError::NotFound(id))?;
        Ok(MonitorDto::from(&monitor))
    }

    /// Returns every monitor record in the store.
    ///
    /// Order is implementation-defined and stable only within a single
    /// snapshot read. An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorServiceError::Store`] when the store lookup fails.
    pub async fn find_all(&self) -> MonitorServiceResult<Vec<MonitorDto>> {
        let monitors = self.store.find_all().await?;
        Ok(monitors.iter().map(MonitorDto::from).collect())
    }

    /// Overwrites every field of an existing record, preserving its identity.
    ///
    /// The serial number re-enters the uniqueness domain: moving a record to
    /// a serial number held by a different record is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorServiceError::NotFound`] when no record has the id,
    /// or [`MonitorServiceError::AlreadyExists`] when the new serial number
    /// collides with another record.
    pub async fn update(
        &self,
        id: MonitorId,
        input: MonitorDto,
    ) -> MonitorServiceResult<MonitorDto> {
        let mut monitor = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(MonitorServiceError::NotFound(id))?;

        let fields = input.into_fields();
        if fields.serial_number() != monitor.serial_number()
            && self
                .store
                .exists_by_serial_number(fields.serial_number())
                .await?
        {
            return Err(MonitorServiceError::AlreadyExists(
                fields.serial_number().clone(),
            ));
        }

        monitor.overwrite(fields);
        self.store.update(&monitor).await?;
        Ok(MonitorDto::from(&monitor))
    }

    /// Removes a monitor record permanently.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorServiceError::NotFound`] when no record has the id.
    pub async fn delete(&self, id: MonitorId) -> MonitorServiceResult<()> {
        self.store.delete(id).await?;
        Ok(())
    }
}
