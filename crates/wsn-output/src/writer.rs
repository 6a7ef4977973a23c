//! The `OutputWriter` trait implemented by backend writers.

use crate::{CycleSummaryRow, EnergySnapshotRow, OutputResult};

/// Trait implemented by output backends (CSV today; anything columnar
/// tomorrow).
pub trait OutputWriter {
    /// Write one cycle summary row.
    fn write_cycle_summary(&mut self, row: &CycleSummaryRow) -> OutputResult<()>;

    /// Write a batch of energy snapshot rows.
    fn write_energy_snapshots(&mut self, rows: &[EnergySnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
