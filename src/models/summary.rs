//! Multi-round summary models

use serde::Serialize;

use super::race::{ContainerKind, Operation};

/// Aggregated statistics for one (operation, container) cell across rounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellStats {
    /// Number of measured rounds
    pub samples: u32,

    // Time statistics (milliseconds)
    pub mean_ms: f64,
    pub median_ms: f64,
    pub min_ms: i64,
    pub max_ms: i64,
    pub stddev_ms: f64,
}

impl CellStats {
    /// Build statistics from per-round millisecond samples
    pub fn from_samples(samples: &[i64]) -> Option<Self> {
        let min_ms = *samples.iter().min()?;
        let max_ms = *samples.iter().max()?;
        let count = samples.len() as f64;

        let mean_ms = samples.iter().map(|&ms| ms as f64).sum::<f64>() / count;

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        let median_ms = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
        } else {
            sorted[mid] as f64
        };

        let variance = samples
            .iter()
            .map(|&ms| (ms as f64 - mean_ms).powi(2))
            .sum::<f64>()
            / count;

        Some(Self {
            samples: samples.len() as u32,
            mean_ms,
            median_ms,
            min_ms,
            max_ms,
            stddev_ms: variance.sqrt(),
        })
    }

    /// Mean rounded down to whole milliseconds
    pub fn mean_floor_ms(&self) -> i64 {
        self.mean_ms.floor() as i64
    }
}

/// One summary row; `None` marks a cell that is never measured
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryRow {
    pub vector: Option<CellStats>,
    pub list: Option<CellStats>,
    pub set: Option<CellStats>,
}

impl SummaryRow {
    pub fn get(&self, kind: ContainerKind) -> Option<CellStats> {
        match kind {
            ContainerKind::Vector => self.vector,
            ContainerKind::List => self.list,
            ContainerKind::Set => self.set,
        }
    }

    pub fn record(&mut self, kind: ContainerKind, stats: Option<CellStats>) {
        match kind {
            ContainerKind::Vector => self.vector = stats,
            ContainerKind::List => self.list = stats,
            ContainerKind::Set => self.set = stats,
        }
    }
}

/// Statistics over every round of a race
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RaceSummary {
    pub rounds: u32,
    pub read: SummaryRow,
    pub sort: SummaryRow,
    pub insert: SummaryRow,
    pub delete: SummaryRow,
}

impl RaceSummary {
    pub fn row(&self, operation: Operation) -> &SummaryRow {
        match operation {
            Operation::Read => &self.read,
            Operation::Sort => &self.sort,
            Operation::Insert => &self.insert,
            Operation::Delete => &self.delete,
        }
    }

    pub fn row_mut(&mut self, operation: Operation) -> &mut SummaryRow {
        match operation {
            Operation::Read => &mut self.read,
            Operation::Sort => &mut self.sort,
            Operation::Insert => &mut self.insert,
            Operation::Delete => &mut self.delete,
        }
    }
}
