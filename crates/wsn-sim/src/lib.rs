//! `wsn-sim` — cycle loop orchestrator for the rust_wsn simulator.
//!
//! # The cycle loop
//!
//! ```text
//! loop:
//!   ① Transmit — every live plain node sends one unit toward its cluster
//!                head (fixed-head: nearest live head; rotating: this
//!                cycle's elected sector head), dying if the budget can't
//!                cover the cost.
//!   ② Forward  — every live head receives, aggregates, and forwards one
//!                unit to the sink.
//!   ③ Record   — cumulative dead count + energy snapshot appended to the
//!                history (plain nodes in node order, then heads).
//!   ④ Halt     — when all plain nodes are dead, or (fixed-head) all heads
//!                are dead.  The terminal record is always kept.
//! ```
//!
//! The loop needs no cycle cap: every live entity strictly loses energy or
//! dies each cycle and dead entities never transmit, so the dead count is
//! non-decreasing and bounded by the population.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`record`]   | `CycleRecord` — one cycle's dead count + snapshot       |
//! | [`observer`] | `SimObserver` trait, `NoopObserver`                     |
//! | [`engine`]   | `CycleEngine` trait, fixed-head + rotating engines      |
//! | [`stats`]    | Milestone extraction (`summarize`, `closest_cycle`)     |
//! | [`runner`]   | `run_*_simulation`, `find_optimal_radius` entry points  |
//! | [`error`]    | `SimError`, `SimResult`                                 |

pub mod engine;
pub mod error;
pub mod observer;
pub mod record;
pub mod runner;
pub mod stats;


pub use engine::{run_to_depletion, CycleEngine, FixedHeadEngine, RotatingEngine};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use record::CycleRecord;
pub use runner::{
    find_optimal_radius, run_fixed_head_simulation, run_sector_simulation, FixedHeadOutcome,
    RadiusSweep, SectorOutcome,
};
pub use stats::{summarize, Milestone, MilestoneLabel, RunSummary};
