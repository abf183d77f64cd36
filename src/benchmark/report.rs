//! Fixed-format text report

use std::fmt;

use crate::constants::{NOT_APPLICABLE_MS, labels};
use crate::models::{CellStats, ContainerKind, Operation, RaceReport, RaceSummary};

/// One round: failures, container sizes, then the timing table
impl fmt::Display for RaceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in &self.failures {
            writeln!(f, "{}", failure)?;
        }

        for kind in ContainerKind::ALL {
            writeln!(f, "{} size after reading: {}", kind, self.sizes.get(kind))?;
        }
        writeln!(f)?;

        writeln!(f, "{}", labels::TABLE_TITLE)?;
        write_header(f)?;

        for operation in Operation::ALL {
            let row = self.row(operation);
            writeln!(f, "{}\t\t{}\t{}\t{}", operation, row.vector, row.list, row.set)?;
        }

        Ok(())
    }
}

/// Multi-round summary; cells read `mean/min/max`
impl fmt::Display for RaceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary over {} rounds (mean/min/max ms)", self.rounds)?;
        write_header(f)?;

        for operation in Operation::ALL {
            let row = self.row(operation);
            write!(f, "{}\t", operation)?;
            for kind in ContainerKind::ALL {
                write!(f, "\t")?;
                write_summary_cell(f, row.get(kind))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

fn write_header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
        f,
        "{}\t{}\t{}\t{}",
        labels::OPERATION,
        labels::VECTOR,
        labels::LIST,
        labels::SET
    )
}

fn write_summary_cell(f: &mut fmt::Formatter<'_>, stats: Option<CellStats>) -> fmt::Result {
    match stats {
        Some(stats) => write!(
            f,
            "{}/{}/{}",
            stats.mean_floor_ms(),
            stats.min_ms,
            stats.max_ms
        ),
        None => write!(f, "{}", NOT_APPLICABLE_MS),
    }
}
