//! Entry points for the visualization/CLI layer.
//!
//! Each runner generates a topology, drives the matching engine to
//! depletion, and post-processes the history into a [`RunSummary`].  The
//! outcome structs carry the final node state so external layers can plot
//! residual-energy maps without reaching into the engine.
//!
//! The placement seed is an explicit parameter everywhere; pass
//! [`DEFAULT_SEED`][wsn_core::radio::DEFAULT_SEED] to reproduce the
//! reference topologies.

use log::info;

use wsn_core::{NodeId, Point2};
use wsn_node::SensorNode;
use wsn_topology::{Bounds, FixedHeadTopology, SectorTopology};

use crate::engine::{run_to_depletion, FixedHeadEngine, RotatingEngine};
use crate::stats::{summarize, RunSummary};
use crate::{SimError, SimObserver, SimResult};

/// Result of a rotating-cluster run.
#[derive(Clone, Debug)]
pub struct SectorOutcome {
    pub summary: RunSummary,
    /// Final node state (positions + residual energies), in node order.
    pub nodes: Vec<SensorNode>,
    /// Sector membership, as generated.
    pub groups: Vec<Vec<NodeId>>,
    pub center: Point2,
}

/// Result of a fixed-head run.
#[derive(Clone, Debug)]
pub struct FixedHeadOutcome {
    pub summary: RunSummary,
    pub nodes: Vec<SensorNode>,
    pub heads: Vec<SensorNode>,
    /// Initial nearest-head membership, as generated.
    pub groups: Vec<Vec<NodeId>>,
}

/// Result of a radius sweep: the winning radius plus the whole curve.
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusSweep {
    /// The candidate maximizing network lifetime; ties go to the first
    /// maximum in candidate order.
    pub best_radius: f64,
    /// `(radius, lifetime_cycles)` per candidate, in candidate order.
    pub lifetimes: Vec<(f64, usize)>,
}

/// Run the rotating-cluster simulation: `node_count` sensors partitioned
/// into `sector_count` wedges around `sink`, heads re-elected every cycle.
pub fn run_sector_simulation<O: SimObserver>(
    sink: Point2,
    node_count: usize,
    sector_count: usize,
    seed: u64,
    observer: &mut O,
) -> SimResult<SectorOutcome> {
    let topology =
        SectorTopology::generate(node_count, sector_count, Bounds::default(), sink, seed)?;
    let population = topology.node_count();
    let groups = topology.groups.clone();
    let center = topology.center;

    info!("rotating run: {population} nodes, {sector_count} sectors, sink {sink}");
    let mut engine = RotatingEngine::new(topology, sink);
    let history = run_to_depletion(&mut engine, observer);
    let summary = summarize(&history, population);

    Ok(SectorOutcome {
        summary,
        nodes: engine.into_nodes(),
        groups,
        center,
    })
}

/// Run the fixed-head simulation: `node_count` sensors, 5 permanent heads
/// at `radius` around `sink`.
pub fn run_fixed_head_simulation<O: SimObserver>(
    sink: Point2,
    node_count: usize,
    radius: f64,
    seed: u64,
    observer: &mut O,
) -> SimResult<FixedHeadOutcome> {
    let topology =
        FixedHeadTopology::generate(node_count, radius, Bounds::default(), sink, seed)?;
    let population = topology.node_count();
    let groups = topology.groups.clone();

    info!("fixed-head run: {population} nodes, radius {radius} m, sink {sink}");
    let mut engine = FixedHeadEngine::new(topology, sink);
    let history = run_to_depletion(&mut engine, observer);
    let summary = summarize(&history, population);

    let (nodes, heads) = engine.into_parts();
    Ok(FixedHeadOutcome { summary, nodes, heads, groups })
}

/// Find the head-placement radius maximizing network lifetime by running
/// the fixed-head simulation once per candidate.
///
/// Lifetime is the total cycle count until termination.  The returned sweep
/// keeps every candidate's lifetime so callers can plot the curve.
pub fn find_optimal_radius(
    sink: Point2,
    node_count: usize,
    candidates: &[f64],
    seed: u64,
) -> SimResult<RadiusSweep> {
    if candidates.is_empty() {
        return Err(SimError::Config("radius sweep needs at least one candidate".into()));
    }

    let mut lifetimes = Vec::with_capacity(candidates.len());
    for &radius in candidates {
        let outcome = run_fixed_head_simulation(
            sink,
            node_count,
            radius,
            seed,
            &mut crate::NoopObserver,
        )?;
        let lifetime = outcome.summary.alive_per_cycle.len();
        info!("radius {radius} m: lifetime {lifetime} cycles");
        lifetimes.push((radius, lifetime));
    }

    // Strict `>` keeps the first maximum on ties.
    let mut best = lifetimes[0];
    for &(radius, lifetime) in &lifetimes[1..] {
        if lifetime > best.1 {
            best = (radius, lifetime);
        }
    }

    Ok(RadiusSweep { best_radius: best.0, lifetimes })
}
