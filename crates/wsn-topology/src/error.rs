//! Topology-generation error type.

use thiserror::Error;

/// Errors produced by `wsn-topology`.
///
/// All of these are configuration errors detected before any simulation
/// state is built; none are recoverable.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("cannot sample {requested} grid indices without replacement from {capacity}")]
    GridExhausted { requested: usize, capacity: usize },

    #[error("node count must be at least 1")]
    NoNodes,

    #[error("sector count must be at least 1")]
    NoSectors,
}

pub type TopologyResult<T> = Result<T, TopologyError>;
