//! Utility functions

pub mod time;

pub use time::{floor_millis, format_duration, format_milliseconds};
