//! In-memory monitor store for tests and embedded use.

mod store;

pub use store::InMemoryMonitorStore;
