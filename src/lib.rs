//! Container Race - Container Operation Benchmarking
//!
//! This library races three containers populated from the same line-oriented
//! data file and reports how long each elementary operation took on each.
//!
//! # Containers
//!
//! - **Vector**: contiguous array, amortized O(1) append, O(n) mid-point splice
//! - **List**: doubly linked list, O(n) traversal to reach the mid-point
//! - **Set**: ordered unique set, O(log n) insert by value, duplicates collapsed
//!
//! # Operations
//!
//! Every round runs Read, Sort, Insert (marker at the mid-point) and Delete
//! (element at the mid-point), in that order, and reports whole milliseconds.
//! The set is ordered by construction, so its Sort cell reads `-1`.

pub mod benchmark;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{RaceError, RaceResult};
