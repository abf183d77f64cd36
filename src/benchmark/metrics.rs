//! Metrics collection and analysis

use crate::models::{CellStats, ContainerKind, Operation, RaceReport, RaceSummary, TimingRow};
use crate::utils::floor_millis;

/// Metrics collector for multi-round analysis
pub struct MetricsCollector {
    runs: Vec<RaceReport>,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Add a finished round
    pub fn add_report(&mut self, report: &RaceReport) {
        self.runs.push(report.clone());
    }

    /// Calculate per-cell statistics over every collected round
    ///
    /// Cells that are never measured (the set's sort) stay `None`.
    pub fn calculate_summary(&self) -> Option<RaceSummary> {
        if self.runs.is_empty() {
            return None;
        }

        let mut summary = RaceSummary {
            rounds: self.runs.len() as u32,
            ..RaceSummary::default()
        };

        for operation in Operation::ALL {
            for kind in ContainerKind::ALL {
                let samples: Vec<i64> = self
                    .runs
                    .iter()
                    .filter_map(|run| run.cell(operation, kind).duration())
                    .map(floor_millis)
                    .collect();

                summary
                    .row_mut(operation)
                    .record(kind, CellStats::from_samples(&samples));
            }
        }

        Some(summary)
    }

    /// Get number of collected rounds
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Fastest container per operation in the last collected round
    pub fn leaders(&self) -> Vec<(Operation, ContainerKind)> {
        let Some(last) = self.runs.last() else {
            return Vec::new();
        };

        Operation::ALL
            .into_iter()
            .filter_map(|operation| fastest(last.row(operation)).map(|kind| (operation, kind)))
            .collect()
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Container with the lowest measured time in a row; ties go to the leftmost column
fn fastest(row: &TimingRow) -> Option<ContainerKind> {
    ContainerKind::ALL
        .into_iter()
        .filter_map(|kind| row.get(kind).duration().map(|elapsed| (kind, elapsed)))
        .min_by_key(|(_, elapsed)| *elapsed)
        .map(|(kind, _)| kind)
}
