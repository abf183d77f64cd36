//! Wall-clock timing of a single benchmarked call

use std::time::Instant;

use crate::models::Timing;

/// Run `operation`, timing only the call itself
///
/// The clock is read immediately before and after the closure; nothing else
/// happens between the two readings.
pub fn time<T, F>(operation: F) -> (T, Timing)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = operation();
    let elapsed = start.elapsed();

    (output, Timing::Measured(elapsed))
}
