//! Adapter implementations of the monitor inventory ports.

pub mod memory;
pub mod postgres;
