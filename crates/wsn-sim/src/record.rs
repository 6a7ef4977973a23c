//! Per-cycle history records.

/// What one simulation cycle leaves behind.
///
/// `dead_count` is cumulative — every node dead at the end of the cycle is
/// counted, not just this cycle's deaths.  `energies` holds every plain
/// node's residual energy in stable node order, followed by every head's in
/// stable head order (rotating runs have no separate heads, so the snapshot
/// is exactly the node population).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CycleRecord {
    pub dead_count: usize,
    pub energies: Vec<f64>,
}
