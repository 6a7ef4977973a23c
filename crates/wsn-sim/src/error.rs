use thiserror::Error;

use wsn_topology::TopologyError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("topology error: {0}")]
    Topology(#[from] TopologyError),
}

pub type SimResult<T> = Result<T, SimError>;
