//! Integration test utilities for the dining recommendation server
//!
//! Spawns the real router against PostgreSQL with mocked upstream services.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
