//! Race measurement models

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::constants::{NOT_APPLICABLE_MS, labels};
use crate::utils::time::floor_millis;

/// Container raced through the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// Contiguous array (`Vec<String>`)
    Vector,
    /// Doubly linked list (`LinkedList<String>`)
    List,
    /// Ordered unique set (`BTreeSet<String>`)
    Set,
}

impl ContainerKind {
    /// Report column order
    pub const ALL: [ContainerKind; 3] = [Self::Vector, Self::List, Self::Set];

    pub fn label(self) -> &'static str {
        match self {
            Self::Vector => labels::VECTOR,
            Self::List => labels::LIST,
            Self::Set => labels::SET,
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Benchmarked operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Read,
    Sort,
    Insert,
    Delete,
}

impl Operation {
    /// Report row order
    pub const ALL: [Operation; 4] = [Self::Read, Self::Sort, Self::Insert, Self::Delete];

    pub fn label(self) -> &'static str {
        match self {
            Self::Read => labels::READ,
            Self::Sort => labels::SORT,
            Self::Insert => labels::INSERT,
            Self::Delete => labels::DELETE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of timing one (operation, container) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timing {
    /// Elapsed wall-clock time of the wrapped call
    Measured(Duration),
    /// The operation does not apply to this container
    NotApplicable,
}

impl Timing {
    /// Zero-duration measurement reported for failed passes
    pub const ZERO: Timing = Timing::Measured(Duration::ZERO);

    /// Whole milliseconds, rounded down, or `-1` when not applicable
    pub fn millis(self) -> i64 {
        match self {
            Self::Measured(elapsed) => floor_millis(elapsed),
            Self::NotApplicable => NOT_APPLICABLE_MS,
        }
    }

    pub fn duration(self) -> Option<Duration> {
        match self {
            Self::Measured(elapsed) => Some(elapsed),
            Self::NotApplicable => None,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.millis())
    }
}

impl Serialize for Timing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.millis())
    }
}

/// One report row: a timing per container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimingRow {
    pub vector: Timing,
    pub list: Timing,
    pub set: Timing,
}

impl TimingRow {
    pub fn get(&self, kind: ContainerKind) -> Timing {
        match kind {
            ContainerKind::Vector => self.vector,
            ContainerKind::List => self.list,
            ContainerKind::Set => self.set,
        }
    }

    pub fn record(&mut self, kind: ContainerKind, timing: Timing) {
        match kind {
            ContainerKind::Vector => self.vector = timing,
            ContainerKind::List => self.list = timing,
            ContainerKind::Set => self.set = timing,
        }
    }
}

/// Element counts after the read pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContainerSizes {
    pub vector: usize,
    pub list: usize,
    pub set: usize,
}

impl ContainerSizes {
    pub fn get(&self, kind: ContainerKind) -> usize {
        match kind {
            ContainerKind::Vector => self.vector,
            ContainerKind::List => self.list,
            ContainerKind::Set => self.set,
        }
    }

    pub fn record(&mut self, kind: ContainerKind, size: usize) {
        match kind {
            ContainerKind::Vector => self.vector = size,
            ContainerKind::List => self.list = size,
            ContainerKind::Set => self.set = size,
        }
    }
}

/// Everything one round of the race produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RaceReport {
    /// Round number, starting at 1
    pub round: u32,
    /// Human-readable failures, in the order they happened
    pub failures: Vec<String>,
    pub sizes: ContainerSizes,
    pub read: TimingRow,
    pub sort: TimingRow,
    pub insert: TimingRow,
    pub delete: TimingRow,
}

impl RaceReport {
    pub fn new(round: u32) -> Self {
        Self {
            round,
            ..Self::default()
        }
    }

    pub fn row(&self, operation: Operation) -> &TimingRow {
        match operation {
            Operation::Read => &self.read,
            Operation::Sort => &self.sort,
            Operation::Insert => &self.insert,
            Operation::Delete => &self.delete,
        }
    }

    pub fn row_mut(&mut self, operation: Operation) -> &mut TimingRow {
        match operation {
            Operation::Read => &mut self.read,
            Operation::Sort => &mut self.sort,
            Operation::Insert => &mut self.insert,
            Operation::Delete => &mut self.delete,
        }
    }

    pub fn cell(&self, operation: Operation, kind: ContainerKind) -> Timing {
        self.row(operation).get(kind)
    }
}
