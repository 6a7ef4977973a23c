//! `SensorNode` and its energy-consumption transition.

use wsn_core::radio::{self, HEAD_INITIAL_ENERGY, PLAIN_INITIAL_ENERGY};
use wsn_core::Point2;

/// Transmission role.  Dispatch is by tag: a plain sensor pays the transmit
/// cost only, a head additionally pays receive and aggregation costs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Plain,
    Head,
}

/// One sensor in the deployment.
///
/// Created once at topology generation, mutated every cycle by
/// [`consume_energy`][SensorNode::consume_energy], never destroyed — dead
/// nodes stay in the population for counting and plotting.
///
/// # Invariants
///
/// - `energy` is monotonically non-increasing while the node is alive and
///   frozen once it is dead.
/// - Death is irreversible: a dead node never transmits, never consumes
///   energy, and is excluded from head candidacy and relay targeting.
/// - Death is atomic: if a transmission would drive `energy` negative, the
///   node dies and `energy` keeps its pre-transmission value (no partial
///   draw, no clamp to zero).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorNode {
    position: Point2,
    energy: f64,
    role: Role,
    dead: bool,
}

impl SensorNode {
    /// A plain sensor with the standard 2 J budget.
    pub fn plain(position: Point2) -> Self {
        Self {
            position,
            energy: PLAIN_INITIAL_ENERGY,
            role: Role::Plain,
            dead: false,
        }
    }

    /// A permanent cluster head with the larger 4 J budget.
    pub fn head(position: Point2) -> Self {
        Self {
            position,
            energy: HEAD_INITIAL_ENERGY,
            role: Role::Head,
            dead: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Remaining energy in joules.  May be read after death; it then holds
    /// the value the node had when it died.
    #[inline]
    pub fn energy(&self) -> f64 {
        self.energy
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Euclidean distance from this node to `point`.
    #[inline]
    pub fn distance_to(&self, point: Point2) -> f64 {
        self.position.distance_to(point)
    }

    /// Perform this cycle's transmission toward `target`, paying the
    /// role-dependent cost.
    ///
    /// Plain: transmit cost over the distance to `target`.
    /// Head: receive + transmit + aggregation.
    ///
    /// If the budget cannot cover the cost the node dies and its energy is
    /// left untouched.  No-op on a dead node.
    pub fn consume_energy(&mut self, target: Point2) {
        if self.dead {
            return;
        }
        let distance = self.distance_to(target);
        let cost = match self.role {
            Role::Plain => radio::transmit_cost(distance),
            Role::Head => radio::head_cost(distance),
        };
        if self.energy - cost < 0.0 {
            self.dead = true;
        } else {
            self.energy -= cost;
        }
    }

    /// Force death without a transmission — used when a plain node has no
    /// live head left to target.
    pub fn set_dead(&mut self) {
        self.dead = true;
    }

    /// Take on head duty for the current cycle (rotating variant).  Energy
    /// is untouched; only cost dispatch changes.
    pub fn promote(&mut self) {
        self.role = Role::Head;
    }

    /// Return to plain duty after a rotation cycle.
    pub fn demote(&mut self) {
        self.role = Role::Plain;
    }
}
