use crate::graph::node::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("edge {0} - {1} already exists")]
    DuplicateEdge(NodeId, NodeId),

    #[error("self-loop on node {0}")]
    SelfLoop(NodeId),

    #[error("invalid base cost {0}, must be finite and > 0")]
    InvalidWeight(f64),

    #[error("edge {from} - {to}: base cost {base_cost} gives effective weight {weight}, must be > 0")]
    ZeroWeight {
        from: NodeId,
        to: NodeId,
        base_cost: f64,
        weight: f64,
    },

    #[error("invalid power rating {1} for node {0}, must be finite and > 0")]
    InvalidPower(NodeId, f64),

    #[error("invalid density {0}, must be within [0, 1]")]
    InvalidDensity(f64),

    #[error("expected {expected} power ratings, got {actual}")]
    PowerCountMismatch { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
