//! Domain models
//!
//! This module contains the measurement and report models shared by the race
//! pipeline, the metrics collector and the JSON export.

pub mod race;
pub mod summary;

pub use race::*;
pub use summary::*;
