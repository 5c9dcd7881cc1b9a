//! `PostgreSQL` implementation of the monitor store port.

use super::{
    models::{MonitorRow, NewMonitorRow},
    schema::monitors,
};
use crate::monitor::{
    domain::{Monitor, MonitorFields, MonitorId, SerialNumber},
    ports::{MonitorStore, MonitorStoreError, MonitorStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the monitor store adapter.
pub type MonitorPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed monitor store.
#[derive(Debug, Clone)]
pub struct PostgresMonitorStore {
    pool: MonitorPgPool,
}

impl PostgresMonitorStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: MonitorPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> MonitorStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> MonitorStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(MonitorStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(MonitorStoreError::persistence)?
    }
}

#[async_trait]
impl MonitorStore for PostgresMonitorStore {
    async fn exists_by_serial_number(&self, serial: &SerialNumber) -> MonitorStoreResult<bool> {
        let serial_str = serial.as_str().to_owned();
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                monitors::table.filter(monitors::serial_number.eq(&serial_str)),
            ))
            .get_result::<bool>(connection)
            .map_err(MonitorStoreError::persistence)
        })
        .await
    }

    async fn find_by_id(&self, id: MonitorId) -> MonitorStoreResult<Option<Monitor>> {
        self.run_blocking(move |connection| {
            let row = monitors::table
                .filter(monitors::id.eq(id.into_inner()))
                .select(MonitorRow::as_select())
                .first::<MonitorRow>(connection)
                .optional()
                .map_err(MonitorStoreError::persistence)?;
            Ok(row.map(row_to_monitor))
        })
        .await
    }

    async fn find_all(&self) -> MonitorStoreResult<Vec<Monitor>> {
        self.run_blocking(move |connection| {
            let rows = monitors::table
                .select(MonitorRow::as_select())
                .load::<MonitorRow>(connection)
                .map_err(MonitorStoreError::persistence)?;
            Ok(rows.into_iter().map(row_to_monitor).collect())
        })
        .await
    }

    async fn insert(&self, fields: &MonitorFields) -> MonitorStoreResult<Monitor> {
        let serial = fields.serial_number().clone();
        let new_row = to_new_row(fields);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(monitors::table)
                .values(&new_row)
                .returning(MonitorRow::as_returning())
                .get_result::<MonitorRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        MonitorStoreError::DuplicateSerialNumber(serial.clone())
                    }
                    _ => MonitorStoreError::persistence(err),
                })?;
            Ok(row_to_monitor(row))
        })
        .await
    }

    async fn update(&self, monitor: &Monitor) -> MonitorStoreResult<()> {
        let id = monitor.id();
        let serial = monitor.serial_number().clone();
        let serial_val = serial.as_str().to_owned();
        let manufacturer_val = monitor.manufacturer().to_owned();
        let price_val = monitor.price();
        let quantity_val = monitor.quantity();
        let diagonal_val = monitor.diagonal();

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(monitors::table.filter(monitors::id.eq(id.into_inner())))
                    .set((
                        monitors::serial_number.eq(&serial_val),
                        monitors::manufacturer.eq(&manufacturer_val),
                        monitors::price.eq(price_val),
                        monitors::quantity.eq(quantity_val),
                        monitors::diagonal.eq(diagonal_val),
                    ))
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            MonitorStoreError::DuplicateSerialNumber(serial.clone())
                        }
                        _ => MonitorStoreError::persistence(err),
                    })?;

            if updated_count == 0 {
                return Err(MonitorStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: MonitorId) -> MonitorStoreResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(monitors::table.filter(monitors::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(MonitorStoreError::persistence)?;

            if deleted_count == 0 {
                return Err(MonitorStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(fields: &MonitorFields) -> NewMonitorRow {
    NewMonitorRow {
        serial_number: fields.serial_number().as_str().to_owned(),
        manufacturer: fields.manufacturer().to_owned(),
        price: fields.price(),
        quantity: fields.quantity(),
        diagonal: fields.diagonal(),
    }
}

fn row_to_monitor(row: MonitorRow) -> Monitor {
    let MonitorRow {
        id,
        serial_number,
        manufacturer,
        price,
        quantity,
        diagonal,
    } = row;

    let fields = MonitorFields::new(
        SerialNumber::new(serial_number),
        manufacturer,
        price,
        quantity,
        diagonal,
    );
    Monitor::from_persisted(MonitorId::new(id), fields)
}
