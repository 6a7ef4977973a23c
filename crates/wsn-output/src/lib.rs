//! `wsn-output` — persistence of run histories for external charting.
//!
//! The simulator itself never touches disk; this crate bridges the engine's
//! observer hooks to pluggable output backends.  One backend ships: CSV,
//! which is what the downstream plotting scripts consume.
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`row`]      | Plain data rows written by backends               |
//! | [`writer`]   | The `OutputWriter` trait                          |
//! | [`csv`]      | CSV backend (two files, headered)                 |
//! | [`observer`] | `SimOutputObserver<W>` — `SimObserver` → writer   |
//! | [`error`]    | `OutputError`, `OutputResult`                     |

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CycleSummaryRow, EnergySnapshotRow};
pub use writer::OutputWriter;
