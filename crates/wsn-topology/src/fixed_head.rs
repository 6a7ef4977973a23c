//! Fixed-head topology: five permanent cluster heads on a circle around the
//! sink, plain nodes assigned to their nearest head.

use std::f64::consts::TAU;

use wsn_core::radio::HEAD_COUNT;
use wsn_core::{HeadId, NodeId, Point2, SimRng};
use wsn_node::SensorNode;

use crate::placement::{scatter_squared, Bounds};
use crate::TopologyResult;

/// A deployment with permanent, pre-placed cluster heads.
///
/// Heads never rotate; group membership is fixed at generation.  During the
/// simulation nodes re-target only when their head dies (nearest *live*
/// head), which the engine resolves per cycle — the static groups here are
/// the initial assignment the statistics and plotting layers consume.
#[derive(Clone, Debug)]
pub struct FixedHeadTopology {
    /// All plain nodes, in placement order.  `NodeId` indexes this vec.
    pub nodes: Vec<SensorNode>,
    /// The permanent heads, in angular placement order.  `HeadId` indexes
    /// this vec.
    pub heads: Vec<SensorNode>,
    /// Member node IDs per head, in node order.
    pub groups: Vec<Vec<NodeId>>,
}

impl FixedHeadTopology {
    /// Place `node_count` plain nodes inside `bounds` and 5 permanent heads
    /// at equally spaced angles around `sink` at distance `radius`.
    pub fn generate(
        node_count: usize,
        radius: f64,
        bounds: Bounds,
        sink: Point2,
        seed: u64,
    ) -> TopologyResult<Self> {
        let mut rng = SimRng::new(seed);
        let positions = scatter_squared(node_count, bounds, &mut rng)?;
        let nodes: Vec<SensorNode> = positions.into_iter().map(SensorNode::plain).collect();

        let step = TAU / HEAD_COUNT as f64;
        let heads: Vec<SensorNode> = (0..HEAD_COUNT)
            .map(|i| {
                let angle = step * i as f64;
                SensorNode::head(Point2::new(
                    sink.x + radius * angle.cos(),
                    sink.y + radius * angle.sin(),
                ))
            })
            .collect();

        let mut groups: Vec<Vec<NodeId>> = vec![Vec::new(); HEAD_COUNT];
        for (i, node) in nodes.iter().enumerate() {
            let nearest = nearest_head_index(node, &heads);
            groups[nearest].push(NodeId(i as u32));
        }

        Ok(Self { nodes, heads, groups })
    }

    /// Total plain-node population (heads excluded).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Member node IDs of one head's group, in node order.
    pub fn members(&self, head: HeadId) -> &[NodeId] {
        &self.groups[head.index()]
    }
}

/// Index of the head nearest to `node` by Euclidean distance.
///
/// Linear scan with strict `<`, so ties break to the first-found minimum.
/// `heads` must be non-empty.
fn nearest_head_index(node: &SensorNode, heads: &[SensorNode]) -> usize {
    let mut min_dist = f64::INFINITY;
    let mut nearest = 0;
    for (i, head) in heads.iter().enumerate() {
        let dist = node.distance_to(head.position());
        if dist < min_dist {
            min_dist = dist;
            nearest = i;
        }
    }
    nearest
}
