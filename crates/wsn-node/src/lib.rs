//! `wsn-node` — the sensor node state machine for `rust_wsn`.
//!
//! A node is a plain data record with explicit mutation methods.  The only
//! state transitions are energy consumption (which may kill the node) and
//! role changes for per-cycle head rotation.  The guarantee the type
//! enforces: energy only ever decreases, and a dead node stays dead and
//! inert.

pub mod node;

#[cfg(test)]
mod tests;

pub use node::{Role, SensorNode};
