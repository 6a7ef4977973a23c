//! Tests for the CSV backend and the observer bridge.

use std::fs;

use wsn_sim::{CycleRecord, SimObserver};

use crate::csv::CsvWriter;
use crate::row::{CycleSummaryRow, EnergySnapshotRow};
use crate::writer::OutputWriter;
use crate::SimOutputObserver;

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn writes_headers_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();

        writer
            .write_cycle_summary(&CycleSummaryRow { cycle: 1, alive: 10, dead: 0 })
            .unwrap();
        writer
            .write_energy_snapshots(&[EnergySnapshotRow { cycle: 1, entity: 0, energy: 2.0 }])
            .unwrap();
        writer.finish().unwrap();

        let summaries = fs::read_to_string(dir.path().join("cycle_summaries.csv")).unwrap();
        assert_eq!(summaries, "cycle,alive,dead\n1,10,0\n");

        let snapshots = fs::read_to_string(dir.path().join("energy_snapshots.csv")).unwrap();
        assert_eq!(snapshots, "cycle,entity,energy\n1,0,2\n");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use super::*;

    /// In-memory writer capturing rows for assertions.
    #[derive(Default)]
    struct MemWriter {
        summaries: Vec<CycleSummaryRow>,
        snapshots: Vec<EnergySnapshotRow>,
        finished: bool,
    }

    impl OutputWriter for MemWriter {
        fn write_cycle_summary(&mut self, row: &CycleSummaryRow) -> crate::OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }
        fn write_energy_snapshots(
            &mut self,
            rows: &[EnergySnapshotRow],
        ) -> crate::OutputResult<()> {
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }
        fn finish(&mut self) -> crate::OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn bridges_records_to_rows() {
        let mut observer = SimOutputObserver::new(MemWriter::default(), 10, 1);
        let record = CycleRecord { dead_count: 3, energies: vec![1.5, 0.2] };

        observer.on_cycle_end(0, &record);
        observer.on_sim_end(1);
        assert!(observer.take_error().is_none());

        let writer = observer.into_writer();
        assert_eq!(writer.summaries, vec![CycleSummaryRow { cycle: 1, alive: 7, dead: 3 }]);
        assert_eq!(writer.snapshots.len(), 2);
        assert_eq!(writer.snapshots[1].energy, 0.2);
        assert!(writer.finished);
    }

    #[test]
    fn snapshot_interval_zero_disables_snapshots() {
        let mut observer = SimOutputObserver::new(MemWriter::default(), 10, 0);
        let record = CycleRecord { dead_count: 0, energies: vec![2.0] };
        observer.on_cycle_end(0, &record);
        observer.on_cycle_end(1, &record);

        let writer = observer.into_writer();
        assert_eq!(writer.summaries.len(), 2);
        assert!(writer.snapshots.is_empty());
    }

    #[test]
    fn interval_thins_snapshots() {
        let mut observer = SimOutputObserver::new(MemWriter::default(), 10, 3);
        let record = CycleRecord { dead_count: 0, energies: vec![2.0] };
        for cycle in 0..7 {
            observer.on_cycle_end(cycle, &record);
        }
        // Cycles 0, 3, 6 snapshot.
        assert_eq!(observer.into_writer().snapshots.len(), 3);
    }
}
