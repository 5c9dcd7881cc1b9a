//! Monitor inventory service.
//!
//! This crate provides a CRUD service for a monitor inventory entity backed
//! by a relational store, with duplicate-serial-number and not-found error
//! translation between the store and its callers.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! Composition is explicit: [`monitor::services::MonitorService`] takes its
//! store dependency as a constructor parameter; there is no ambient
//! container.

pub mod monitor;
