//! `wsn-core` — foundational types for the `rust_wsn` sensor-network
//! simulator.
//!
//! This crate is a dependency of every other `wsn-*` crate.  It intentionally
//! has no `wsn-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `NodeId`, `HeadId`, `SectorId`                    |
//! | [`point`] | `Point2`, Euclidean distance, normalized angle    |
//! | [`radio`] | First-order radio energy model and its constants  |
//! | [`rng`]   | `SimRng` (explicitly seeded placement RNG)        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod point;
pub mod radio;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{HeadId, NodeId, SectorId};
pub use point::Point2;
pub use rng::SimRng;
