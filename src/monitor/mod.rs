//! Monitor inventory: CRUD over durable monitor records.
//!
//! This module implements the inventory's create, read, read-all, update,
//! and delete operations with duplicate-serial-number and not-found error
//! translation. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Transport shape and mapping in [`transport`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod transport;

#[cfg(test)]
mod tests;
