//! `PostgreSQL` adapter for monitor record persistence.

mod models;
mod schema;
mod store;

pub use store::{MonitorPgPool, PostgresMonitorStore};
