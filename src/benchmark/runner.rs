//! Race runner - Orchestrates the benchmarking process
//!
//! One round is the strictly linear pipeline
//! Load -> Report sizes -> Sort -> Insert -> Delete, run against a vector,
//! a linked list and an ordered set in that order.

use std::collections::{BTreeSet, LinkedList};
use std::io::Write;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::{
    config::{Config, RaceConfig},
    error::{RaceError, RaceResult},
    models::{ContainerKind, Operation, RaceReport, RaceSummary, Timing},
    utils::format_duration,
};

use super::{
    container::{RaceContainer, SortOutcome},
    export::{RaceExport, write_json},
    loader::timed_read,
    metrics::MetricsCollector,
    timing::time,
};

/// Runs race rounds against the configured data file
pub struct RaceRunner {
    config: RaceConfig,
}

impl RaceRunner {
    /// Create a new race runner
    pub fn new(config: RaceConfig) -> Self {
        Self { config }
    }

    /// Run every configured round with fresh containers
    pub fn run(&self) -> Vec<RaceReport> {
        (1..=self.config.rounds)
            .map(|round| self.run_round(round))
            .collect()
    }

    /// Run a single round of the pipeline
    pub fn run_round(&self, round: u32) -> RaceReport {
        info!(round, data_file = %self.config.data_file.display(), "Starting race round");
        let started = Instant::now();

        let mut report = RaceReport::new(round);
        let mut vector = Vec::<String>::new();
        let mut list = LinkedList::<String>::new();
        let mut set = BTreeSet::<String>::new();

        // Race 1: reading the data file
        self.read(&mut vector, &mut report);
        self.read(&mut list, &mut report);
        self.read(&mut set, &mut report);

        info!(
            vector = report.sizes.vector,
            list = report.sizes.list,
            set = report.sizes.set,
            "Containers loaded"
        );

        // Race 2: sorting
        self.sort(&mut vector, &mut report);
        self.sort(&mut list, &mut report);
        self.sort(&mut set, &mut report);

        // Race 3: inserting the marker
        self.insert(&mut vector, &mut report);
        self.insert(&mut list, &mut report);
        self.insert(&mut set, &mut report);

        // Race 4: deleting from the middle
        self.delete(&mut vector, &mut report);
        self.delete(&mut list, &mut report);
        self.delete(&mut set, &mut report);

        info!(
            round,
            elapsed = %format_duration(started.elapsed()),
            "Race round finished"
        );

        report
    }

    fn read<C: RaceContainer>(&self, container: &mut C, report: &mut RaceReport) {
        let timing = match timed_read(container, &self.config.data_file) {
            Ok(timing) => timing,
            Err(e) => {
                Self::record_failure(report, e);
                Timing::ZERO
            }
        };

        report.sizes.record(C::KIND, container.len());
        Self::record(report, Operation::Read, C::KIND, timing);
    }

    fn sort<C: RaceContainer>(&self, container: &mut C, report: &mut RaceReport) {
        let (outcome, timing) = time(|| container.sort_records());

        let timing = match outcome {
            SortOutcome::Sorted => timing,
            SortOutcome::AlreadyOrdered => Timing::NotApplicable,
        };

        Self::record(report, Operation::Sort, C::KIND, timing);
    }

    fn insert<C: RaceContainer>(&self, container: &mut C, report: &mut RaceReport) {
        let marker = self.config.marker.as_str();
        let (grew, timing) = time(|| container.insert_middle(marker));

        if !grew {
            let kind = C::KIND;
            debug!(container = %kind, marker, "Marker already present, insert was a no-op");
        }

        Self::record(report, Operation::Insert, C::KIND, timing);
    }

    fn delete<C: RaceContainer>(&self, container: &mut C, report: &mut RaceReport) {
        if container.is_empty() {
            Self::record_failure(
                report,
                RaceError::EmptyContainer {
                    container: C::KIND,
                    operation: Operation::Delete,
                },
            );
            Self::record(report, Operation::Delete, C::KIND, Timing::ZERO);
            return;
        }

        let (removed, timing) = time(|| container.remove_middle());

        let kind = C::KIND;
        debug!(container = %kind, removed = ?removed, "Removed midpoint element");

        Self::record(report, Operation::Delete, C::KIND, timing);
    }

    fn record(
        report: &mut RaceReport,
        operation: Operation,
        kind: ContainerKind,
        timing: Timing,
    ) {
        debug!(%operation, container = %kind, ms = timing.millis(), "Measured");
        report.row_mut(operation).record(kind, timing);
    }

    fn record_failure(report: &mut RaceReport, e: RaceError) {
        match e {
            RaceError::EmptyContainer { .. } => warn!(code = e.error_code(), "{}", e),
            _ => error!(code = e.error_code(), "{}", e),
        }
        report.failures.push(e.to_string());
    }
}

/// Run every round, write the report to `out` and export JSON when configured
///
/// Returns the per-round reports. A failed JSON export is logged and does not
/// fail the run.
pub fn run_and_report<W: Write>(config: &Config, out: &mut W) -> RaceResult<Vec<RaceReport>> {
    let runner = RaceRunner::new(config.race.clone());
    let reports = runner.run();

    let mut collector = MetricsCollector::new();
    for report in &reports {
        collector.add_report(report);
    }

    for (operation, kind) in collector.leaders() {
        info!(%operation, leader = %kind, "Fastest container");
    }

    let summary: Option<RaceSummary> = if collector.run_count() > 1 {
        collector.calculate_summary()
    } else {
        None
    };

    if let Some(last) = reports.last() {
        write!(out, "{}", last)?;
    }
    if let Some(summary) = &summary {
        writeln!(out)?;
        write!(out, "{}", summary)?;
    }
    out.flush()?;

    if let Some(path) = &config.output.json_path {
        let export = RaceExport::new(&config.race, &reports, summary.as_ref());
        match write_json(path, &export) {
            Ok(()) => info!(path = %path.display(), "Wrote JSON export"),
            Err(e) => error!(path = %path.display(), code = e.error_code(), "{}", e),
        }
    }

    Ok(reports)
}
