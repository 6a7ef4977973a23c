//! Milestone extraction from a completed run history.

use crate::CycleRecord;

/// The three named depletion milestones.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MilestoneLabel {
    FirstDeath,
    HalfDead,
    AllDead,
}

impl MilestoneLabel {
    /// Dead-count target for a population of `n`.
    fn target(self, n: usize) -> f64 {
        match self {
            MilestoneLabel::FirstDeath => 1.0,
            MilestoneLabel::HalfDead => n as f64 / 2.0,
            MilestoneLabel::AllDead => n as f64,
        }
    }
}

impl std::fmt::Display for MilestoneLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MilestoneLabel::FirstDeath => "first death",
            MilestoneLabel::HalfDead => "half dead",
            MilestoneLabel::AllDead => "all dead",
        };
        f.write_str(s)
    }
}

/// One milestone: the cycle whose cumulative dead count came closest to the
/// target, with the network state captured there.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Milestone {
    pub label: MilestoneLabel,
    /// 1-indexed cycle number, as reported to humans and charts.
    pub cycle: usize,
    /// Plain nodes still alive at that cycle.
    pub alive: usize,
    /// The full energy snapshot recorded at that cycle.
    pub energies: Vec<f64>,
}

/// Everything the statistics layer hands to plotting: the full alive-count
/// series plus the three milestones.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// `population - dead_count` per cycle, in cycle order.
    pub alive_per_cycle: Vec<usize>,
    /// First death, half dead, all dead — in that order.
    pub milestones: Vec<Milestone>,
}

/// The 0-indexed cycle whose dead count is closest to `target` — minimum
/// absolute difference, NOT the first cycle reaching the target.  Ties
/// resolve to the lowest index (argmin semantics).
///
/// Several nodes can die in one cycle, so no cycle need hit the target
/// exactly; the closest-match rule still names a milestone cycle.
pub fn closest_cycle(dead_counts: &[usize], target: f64) -> usize {
    let mut best = 0;
    let mut best_diff = f64::INFINITY;
    for (i, &dc) in dead_counts.iter().enumerate() {
        let diff = (dc as f64 - target).abs();
        if diff < best_diff {
            best_diff = diff;
            best = i;
        }
    }
    best
}

/// Post-process a completed history into the alive series and the three
/// milestone snapshots for a plain-node population of `population`.
pub fn summarize(history: &[CycleRecord], population: usize) -> RunSummary {
    let alive_per_cycle: Vec<usize> = history
        .iter()
        .map(|r| population - r.dead_count)
        .collect();

    let dead_counts: Vec<usize> = history.iter().map(|r| r.dead_count).collect();

    let milestones = if history.is_empty() {
        Vec::new()
    } else {
        [
            MilestoneLabel::FirstDeath,
            MilestoneLabel::HalfDead,
            MilestoneLabel::AllDead,
        ]
        .into_iter()
        .map(|label| {
            let idx = closest_cycle(&dead_counts, label.target(population));
            Milestone {
                label,
                cycle: idx + 1,
                alive: alive_per_cycle[idx],
                energies: history[idx].energies.clone(),
            }
        })
        .collect()
    };

    RunSummary { alive_per_cycle, milestones }
}
