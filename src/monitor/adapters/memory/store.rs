//! Thread-safe in-memory implementation of the monitor store port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::monitor::{
    domain::{Monitor, MonitorFields, MonitorId, SerialNumber},
    ports::{MonitorStore, MonitorStoreError, MonitorStoreResult},
};

/// Thread-safe in-memory monitor store.
///
/// Identifiers are assigned from a monotonic sequence starting at 1 and are
/// never reused, matching the relational store's `BIGSERIAL` behaviour.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMonitorStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug)]
struct InMemoryState {
    monitors: HashMap<MonitorId, Monitor>,
    serial_index: HashMap<SerialNumber, MonitorId>,
    next_id: i64,
}

impl Default for InMemoryState {
    fn default() -> Self {
        Self {
            monitors: HashMap::new(),
            serial_index: HashMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryMonitorStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MonitorStore for InMemoryMonitorStore {
    async fn exists_by_serial_number(&self, serial: &SerialNumber) -> MonitorStoreResult<bool> {
        let state = self
            .state
            .read()
            .map_err(|err| MonitorStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.serial_index.contains_key(serial))
    }

    async fn find_by_id(&self, id: MonitorId) -> MonitorStoreResult<Option<Monitor>> {
        let state = self
            .state
            .read()
            .map_err(|err| MonitorStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.monitors.get(&id).cloned())
    }

    async fn find_all(&self) -> MonitorStoreResult<Vec<Monitor>> {
        let state = self
            .state
            .read()
            .map_err(|err| MonitorStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.monitors.values().cloned().collect())
    }

    async fn insert(&self, fields: &MonitorFields) -> MonitorStoreResult<Monitor> {
        let mut state = self
            .state
            .write()
            .map_err(|err| MonitorStoreError::persistence(std::io::Error::other(err.to_string())))?;

        if state.serial_index.contains_key(fields.serial_number()) {
            return Err(MonitorStoreError::DuplicateSerialNumber(
                fields.serial_number().clone(),
            ));
        }

        let id = MonitorId::new(state.next_id);
        state.next_id += 1;

        let monitor = Monitor::from_persisted(id, fields.clone());
        state.serial_index.insert(monitor.serial_number().clone(), id);
        state.monitors.insert(id, monitor.clone());
        Ok(monitor)
    }

    async fn update(&self, monitor: &Monitor) -> MonitorStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| MonitorStoreError::persistence(std::io::Error::other(err.to_string())))?;

        let old_serial = state
            .monitors
            .get(&monitor.id())
            .ok_or(MonitorStoreError::NotFound(monitor.id()))?
            .serial_number()
            .clone();

        if *monitor.serial_number() != old_serial {
            if let Some(&indexed_id) = state.serial_index.get(monitor.serial_number())
                && indexed_id != monitor.id()
            {
                return Err(MonitorStoreError::DuplicateSerialNumber(
                    monitor.serial_number().clone(),
                ));
            }
            state.serial_index.remove(&old_serial);
            state
                .serial_index
                .insert(monitor.serial_number().clone(), monitor.id());
        }

        state.monitors.insert(monitor.id(), monitor.clone());
        Ok(())
    }

    async fn delete(&self, id: MonitorId) -> MonitorStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| MonitorStoreError::persistence(std::io::Error::other(err.to_string())))?;

        let removed = state
            .monitors
            .remove(&id)
            .ok_or(MonitorStoreError::NotFound(id))?;
        state.serial_index.remove(removed.serial_number());
        Ok(())
    }
}
