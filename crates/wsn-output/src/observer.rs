//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use wsn_sim::{CycleRecord, SimObserver};

use crate::row::{CycleSummaryRow, EnergySnapshotRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes cycle summaries and energy snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run completes, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    population: usize,
    /// Write the full energy snapshot every N cycles; 0 disables snapshots
    /// (summaries are always written — they are one row per cycle).
    snapshot_interval: usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` for a plain-node population of
    /// `population`.
    pub fn new(writer: W, population: usize, snapshot_interval: usize) -> Self {
        Self {
            writer,
            population,
            snapshot_interval,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_cycle_end(&mut self, cycle: usize, record: &CycleRecord) {
        let row = CycleSummaryRow {
            cycle: cycle as u64 + 1,
            alive: (self.population - record.dead_count) as u64,
            dead: record.dead_count as u64,
        };
        let result = self.writer.write_cycle_summary(&row);
        self.store_err(result);

        if self.snapshot_interval > 0 && cycle % self.snapshot_interval == 0 {
            let rows: Vec<EnergySnapshotRow> = record
                .energies
                .iter()
                .enumerate()
                .map(|(entity, &energy)| EnergySnapshotRow {
                    cycle: cycle as u64 + 1,
                    entity: entity as u32,
                    energy,
                })
                .collect();
            let result = self.writer.write_energy_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _total_cycles: usize) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
