//! Angular-sector partition for the rotating-cluster variant.

use std::f64::consts::TAU;

use wsn_core::{NodeId, Point2, SectorId, SimRng};
use wsn_node::SensorNode;

use crate::placement::{scatter_squared, Bounds};
use crate::{TopologyError, TopologyResult};

/// A sensor field partitioned into equal angular sectors around a center.
///
/// Sector membership is decided once at generation and never re-evaluated;
/// per-cycle head rotation happens *within* each sector.
#[derive(Clone, Debug)]
pub struct SectorTopology {
    /// All plain nodes, in placement order.  `NodeId` indexes this vec.
    pub nodes: Vec<SensorNode>,
    /// Member node IDs per sector, in node order.
    pub groups: Vec<Vec<NodeId>>,
    /// The partition center (usually the sink).
    pub center: Point2,
}

impl SectorTopology {
    /// Place `node_count` plain nodes inside `bounds` and partition them
    /// into `sector_count` equal wedges around `center`.
    ///
    /// A node with normalized angle `a` belongs to sector `j` iff
    /// `boundaries[j] <= a < boundaries[j+1]` — half-open intervals, first
    /// match wins, so every node lands in exactly one sector.
    pub fn generate(
        node_count: usize,
        sector_count: usize,
        bounds: Bounds,
        center: Point2,
        seed: u64,
    ) -> TopologyResult<Self> {
        if sector_count == 0 {
            return Err(TopologyError::NoSectors);
        }

        let mut rng = SimRng::new(seed);
        let positions = scatter_squared(node_count, bounds, &mut rng)?;
        let nodes: Vec<SensorNode> = positions.into_iter().map(SensorNode::plain).collect();

        // sector_count + 1 boundaries spanning the full circle.
        let step = TAU / sector_count as f64;
        let boundaries: Vec<f64> = (0..=sector_count).map(|i| step * i as f64).collect();

        let mut groups: Vec<Vec<NodeId>> = vec![Vec::new(); sector_count];
        for (i, node) in nodes.iter().enumerate() {
            let angle = node.position().angle_from(center);
            let sector = boundaries
                .windows(2)
                .position(|b| b[0] <= angle && angle < b[1])
                // The top boundary can round below 2π; an angle in that
                // sliver still belongs to the last wedge.
                .unwrap_or(sector_count - 1);
            groups[sector].push(NodeId(i as u32));
        }

        Ok(Self { nodes, groups, center })
    }

    /// Total plain-node population.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Member node IDs of one sector, in node order.
    pub fn members(&self, sector: SectorId) -> &[NodeId] {
        &self.groups[sector.index()]
    }
}
