//! Unit tests for the node state machine.

use wsn_core::radio::{head_cost, transmit_cost, HEAD_INITIAL_ENERGY, PLAIN_INITIAL_ENERGY};
use wsn_core::Point2;

use crate::{Role, SensorNode};

fn origin() -> Point2 {
    Point2::new(0.0, 0.0)
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn plain_starts_with_2_joules() {
        let n = SensorNode::plain(origin());
        assert_eq!(n.energy(), PLAIN_INITIAL_ENERGY);
        assert_eq!(n.role(), Role::Plain);
        assert!(!n.is_dead());
    }

    #[test]
    fn head_starts_with_4_joules() {
        let h = SensorNode::head(origin());
        assert_eq!(h.energy(), HEAD_INITIAL_ENERGY);
        assert_eq!(h.role(), Role::Head);
    }
}

#[cfg(test)]
mod consumption {
    use super::*;

    #[test]
    fn plain_transmit_subtracts_exact_cost() {
        let target = Point2::new(30.0, 40.0); // 50 m away
        let mut n = SensorNode::plain(origin());
        n.consume_energy(target);
        assert_eq!(n.energy(), PLAIN_INITIAL_ENERGY - transmit_cost(50.0));
        assert!(!n.is_dead());
    }

    #[test]
    fn head_pays_receive_transmit_and_aggregation() {
        let target = Point2::new(30.0, 40.0);
        let mut h = SensorNode::head(origin());
        h.consume_energy(target);
        assert_eq!(h.energy(), HEAD_INITIAL_ENERGY - head_cost(50.0));
    }

    #[test]
    fn energy_never_increases() {
        let target = Point2::new(20.0, 20.0);
        let mut n = SensorNode::plain(origin());
        let mut last = n.energy();
        while !n.is_dead() {
            n.consume_energy(target);
            assert!(n.energy() <= last);
            last = n.energy();
        }
    }

    #[test]
    fn death_is_atomic_energy_unchanged() {
        // A far target in the d⁴ regime drains the 2 J budget within a few
        // transmissions; the killing transmission must not touch energy.
        let target = Point2::new(500.0, 0.0);
        let mut n = SensorNode::plain(origin());
        let mut before = n.energy();
        while !n.is_dead() {
            before = n.energy();
            n.consume_energy(target);
        }
        assert_eq!(n.energy(), before);
        assert!(n.energy() > 0.0); // not clamped to zero
        assert!(n.energy() < transmit_cost(500.0));
    }

    #[test]
    fn dead_node_consume_is_a_noop() {
        let mut n = SensorNode::plain(origin());
        n.set_dead();
        let frozen = n.energy();
        n.consume_energy(Point2::new(10.0, 10.0));
        n.consume_energy(Point2::new(10.0, 10.0));
        assert!(n.is_dead());
        assert_eq!(n.energy(), frozen);
    }
}

#[cfg(test)]
mod roles {
    use super::*;

    #[test]
    fn promote_demote_roundtrip_preserves_energy() {
        let mut n = SensorNode::plain(origin());
        n.promote();
        assert_eq!(n.role(), Role::Head);
        n.demote();
        assert_eq!(n.role(), Role::Plain);
        assert_eq!(n.energy(), PLAIN_INITIAL_ENERGY);
    }

    #[test]
    fn promoted_node_pays_head_cost() {
        let target = Point2::new(30.0, 40.0);
        let mut n = SensorNode::plain(origin());
        n.promote();
        n.consume_energy(target);
        assert_eq!(n.energy(), PLAIN_INITIAL_ENERGY - head_cost(50.0));
    }

    #[test]
    fn set_dead_is_permanent() {
        let mut n = SensorNode::plain(origin());
        n.set_dead();
        assert!(n.is_dead());
        n.promote();
        n.consume_energy(origin());
        assert!(n.is_dead());
    }
}
