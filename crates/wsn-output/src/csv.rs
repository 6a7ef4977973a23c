//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `cycle_summaries.csv`
//! - `energy_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CycleSummaryRow, EnergySnapshotRow, OutputResult};

/// Writes run output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("cycle_summaries.csv"))?;
        summaries.write_record(["cycle", "alive", "dead"])?;

        let mut snapshots = Writer::from_path(dir.join("energy_snapshots.csv"))?;
        snapshots.write_record(["cycle", "entity", "energy"])?;

        Ok(Self {
            summaries,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_cycle_summary(&mut self, row: &CycleSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.cycle.to_string(),
            row.alive.to_string(),
            row.dead.to_string(),
        ])?;
        Ok(())
    }

    fn write_energy_snapshots(&mut self, rows: &[EnergySnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.cycle.to_string(),
                row.entity.to_string(),
                row.energy.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
