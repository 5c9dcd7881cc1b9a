//! Transport shape for monitor records.
//!
//! Callers exchange monitors as [`MonitorDto`] values; the mapping to and
//! from the domain representation is pure and has no failure modes.

mod dto;

pub use dto::MonitorDto;
