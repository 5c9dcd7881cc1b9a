//! Unit tests for the monitor inventory module.
