//! The cycle engines: fixed-head (reference behavior) and rotating sectors.

use log::{debug, info};

use wsn_core::{NodeId, Point2};
use wsn_node::SensorNode;
use wsn_topology::{FixedHeadTopology, SectorTopology};

use crate::{CycleRecord, SimObserver};

/// One clustering strategy's per-cycle state transition.
///
/// Implementations own all node state for the duration of a run; the shared
/// loop in [`run_to_depletion`] drives them to depletion and collects the
/// history.
pub trait CycleEngine {
    /// Advance every live entity by one transmission round and return the
    /// cycle's record.
    fn run_cycle(&mut self) -> CycleRecord;

    /// Whether the network is finished after the cycle that produced
    /// `last` — checked after recording, so the terminal record is always
    /// part of the history.
    fn depleted(&self, last: &CycleRecord) -> bool;
}

/// Drive `engine` until depletion, invoking `observer` hooks at every cycle
/// boundary.  Returns the full per-cycle history, terminal cycle included.
pub fn run_to_depletion<E: CycleEngine, O: SimObserver>(
    engine: &mut E,
    observer: &mut O,
) -> Vec<CycleRecord> {
    let mut history = Vec::new();
    loop {
        let cycle = history.len();
        observer.on_cycle_start(cycle);
        let record = engine.run_cycle();
        debug!("cycle {cycle}: {} dead", record.dead_count);
        observer.on_cycle_end(cycle, &record);
        let done = engine.depleted(&record);
        history.push(record);
        if done {
            break;
        }
    }
    info!("network depleted after {} cycles", history.len());
    observer.on_sim_end(history.len());
    history
}

// ── Fixed-head engine ─────────────────────────────────────────────────────────

/// The fixed-head cycle: every live plain node transmits to its nearest
/// *live* head; every live head forwards to the sink.
///
/// Nodes re-target when their head dies — the nearest-live-head scan runs
/// every cycle.  A node with no live head left is forcibly marked dead (it
/// can no longer report data, so for lifetime accounting it is gone).
pub struct FixedHeadEngine {
    nodes: Vec<SensorNode>,
    heads: Vec<SensorNode>,
    sink: Point2,
}

impl FixedHeadEngine {
    pub fn new(topology: FixedHeadTopology, sink: Point2) -> Self {
        Self {
            nodes: topology.nodes,
            heads: topology.heads,
            sink,
        }
    }

    /// Plain-node population (heads excluded).
    pub fn population(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[SensorNode] {
        &self.nodes
    }

    pub fn heads(&self) -> &[SensorNode] {
        &self.heads
    }

    /// Consume the engine, returning the final node and head state for
    /// plotting layers.
    pub fn into_parts(self) -> (Vec<SensorNode>, Vec<SensorNode>) {
        (self.nodes, self.heads)
    }
}

impl CycleEngine for FixedHeadEngine {
    fn run_cycle(&mut self) -> CycleRecord {
        let mut dead_count = 0;
        let mut energies = Vec::with_capacity(self.nodes.len() + self.heads.len());

        // Plain nodes first: transmit to the nearest live head, in stable
        // node order.  Already-dead nodes are re-counted every cycle — the
        // dead count is cumulative.
        for node in &mut self.nodes {
            if node.is_dead() {
                dead_count += 1;
            } else {
                let mut min_dist = f64::INFINITY;
                let mut target = None;
                for head in &self.heads {
                    if head.is_dead() {
                        continue;
                    }
                    let dist = node.distance_to(head.position());
                    if dist < min_dist {
                        min_dist = dist;
                        target = Some(head.position());
                    }
                }
                match target {
                    Some(pos) => {
                        node.consume_energy(pos);
                        if node.is_dead() {
                            dead_count += 1;
                        }
                    }
                    None => {
                        node.set_dead();
                        dead_count += 1;
                    }
                }
            }
            energies.push(node.energy());
        }

        // Heads forward to the sink; their energies append after all plain
        // entries, in stable head order.
        for head in &mut self.heads {
            if !head.is_dead() {
                head.consume_energy(self.sink);
            }
            energies.push(head.energy());
        }

        CycleRecord { dead_count, energies }
    }

    fn depleted(&self, last: &CycleRecord) -> bool {
        last.dead_count == self.nodes.len() || self.heads.iter().all(SensorNode::is_dead)
    }
}

// ── Rotating engine ───────────────────────────────────────────────────────────

/// The rotating-cluster cycle: each sector elects its most charged live
/// member as this cycle's head, the other live members transmit to it, and
/// it forwards to the sink paying the full head cost.
///
/// Electing on residual energy rotates the duty through the sector as the
/// previous head drains, which is the point of the scheme: no node holds
/// the expensive role for long.
pub struct RotatingEngine {
    nodes: Vec<SensorNode>,
    groups: Vec<Vec<NodeId>>,
    sink: Point2,
}

impl RotatingEngine {
    pub fn new(topology: SectorTopology, sink: Point2) -> Self {
        Self {
            nodes: topology.nodes,
            groups: topology.groups,
            sink,
        }
    }

    pub fn population(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[SensorNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<SensorNode> {
        self.nodes
    }

    /// This cycle's head for one sector: the live member with the highest
    /// residual energy, ties to the lowest node index.  `None` if the whole
    /// sector is dead.
    fn elect(&self, group: &[NodeId]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for id in group {
            let node = &self.nodes[id.index()];
            if node.is_dead() {
                continue;
            }
            if best.is_none_or(|(_, e)| node.energy() > e) {
                best = Some((id.index(), node.energy()));
            }
        }
        best.map(|(i, _)| i)
    }
}

impl CycleEngine for RotatingEngine {
    fn run_cycle(&mut self) -> CycleRecord {
        for g in 0..self.groups.len() {
            let Some(head_idx) = self.elect(&self.groups[g]) else {
                continue; // sector fully dead
            };
            let head_pos = self.nodes[head_idx].position();

            for id in &self.groups[g] {
                if id.index() == head_idx {
                    continue;
                }
                let node = &mut self.nodes[id.index()];
                if !node.is_dead() {
                    node.consume_energy(head_pos);
                }
            }

            // The elected head pays the full head cost for this cycle only.
            let head = &mut self.nodes[head_idx];
            head.promote();
            head.consume_energy(self.sink);
            head.demote();
        }

        let mut dead_count = 0;
        let mut energies = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if node.is_dead() {
                dead_count += 1;
            }
            energies.push(node.energy());
        }
        CycleRecord { dead_count, energies }
    }

    fn depleted(&self, last: &CycleRecord) -> bool {
        last.dead_count == self.nodes.len()
    }
}
