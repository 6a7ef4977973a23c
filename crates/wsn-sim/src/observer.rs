//! Simulation observer trait for progress reporting and data collection.

use crate::CycleRecord;

/// Callbacks invoked by [`run_to_depletion`][crate::run_to_depletion] at key
/// points in the cycle loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: usize }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_cycle_end(&mut self, cycle: usize, record: &CycleRecord) {
///         if cycle % self.interval == 0 {
///             println!("cycle {cycle}: {} dead", record.dead_count);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each cycle, before any transmission.
    /// `cycle` is 0-based.
    fn on_cycle_start(&mut self, _cycle: usize) {}

    /// Called after a cycle's transmissions, with the record about to be
    /// appended to the history.
    fn on_cycle_end(&mut self, _cycle: usize, _record: &CycleRecord) {}

    /// Called once after the terminal cycle.  `total_cycles` is the history
    /// length.
    fn on_sim_end(&mut self, _total_cycles: usize) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to run an engine
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
