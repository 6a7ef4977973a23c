//! `wsn-topology` — deterministic sensor placement and cluster partitioning.
//!
//! # Crate layout
//!
//! | Module         | Contents                                             |
//! |----------------|------------------------------------------------------|
//! | [`placement`]  | `Bounds`, grid-sampled pseudo-random scatter         |
//! | [`sector`]     | `SectorTopology` — angular partition around a center |
//! | [`fixed_head`] | `FixedHeadTopology` — 5 permanent heads on a circle  |
//! | [`error`]      | `TopologyError`                                      |
//!
//! Both variants place plain nodes the same way: a candidate grid of N²
//! evenly spaced coordinates per axis, from which N indices are sampled
//! without replacement using an explicitly seeded generator.  The same seed
//! always reproduces the same topology.

pub mod error;
pub mod fixed_head;
pub mod placement;
pub mod sector;


pub use error::{TopologyError, TopologyResult};
pub use fixed_head::FixedHeadTopology;
pub use placement::{scatter, Bounds};
pub use sector::SectorTopology;
