//! Common test utilities and helpers.
//!
//! Shared fixtures for the integration tests: isolated engines, sample
//! subjects and mapping tables.

pub mod fixtures;

pub use fixtures::*;
