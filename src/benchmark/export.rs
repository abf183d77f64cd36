//! JSON export of a finished race

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::RaceConfig;
use crate::error::{RaceError, RaceResult};
use crate::models::{RaceReport, RaceSummary};

/// Everything written to the JSON export file
#[derive(Debug, Serialize)]
pub struct RaceExport<'a> {
    pub generated_at: DateTime<Utc>,
    pub data_file: String,
    pub marker: &'a str,
    pub rounds: &'a [RaceReport],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<&'a RaceSummary>,
}

impl<'a> RaceExport<'a> {
    pub fn new(
        config: &'a RaceConfig,
        rounds: &'a [RaceReport],
        summary: Option<&'a RaceSummary>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            data_file: config.data_file.display().to_string(),
            marker: &config.marker,
            rounds,
            summary,
        }
    }
}

/// Write `export` to `path` as pretty-printed JSON, replacing any existing file
pub fn write_json(path: &Path, export: &RaceExport<'_>) -> RaceResult<()> {
    let file = File::create(path)
        .map_err(|e| RaceError::Export(format!("cannot create {}: {}", path.display(), e)))?;

    write_export(BufWriter::new(file), export)
}

/// Every failure here, serialization included, surfaces as `RaceError::Export`
fn write_export<W: Write>(mut writer: W, export: &RaceExport<'_>) -> RaceResult<()> {
    serde_json::to_writer_pretty(&mut writer, export)?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|e| RaceError::Export(e.to_string()))
}
