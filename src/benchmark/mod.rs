//! Container race engine
//!
//! A round reads the same data file into a vector, a linked list and an
//! ordered set, then times sort, midpoint insert and midpoint delete on each:
//!
//! - `container.rs`: the shared operation set and its three implementations
//! - `loader.rs`: one timed read pass per container
//! - `timing.rs`: the wall-clock wrapper around every measured call
//! - `runner.rs`: the round pipeline and the end-to-end entry point
//! - `metrics.rs`: statistics across rounds
//! - `report.rs` / `export.rs`: text table and JSON output

pub mod container;
pub mod export;
pub mod loader;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod timing;

pub use container::{RaceContainer, SortOutcome};
pub use metrics::MetricsCollector;
pub use runner::{RaceRunner, run_and_report};
