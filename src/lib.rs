//! Single-source shortest paths over small utility networks, under a
//! standard and a power-aware cost model sharing one topology.

pub mod analysis;
pub mod config;
pub mod error;
pub mod graph;
pub mod search;
pub mod session;
pub mod state;

pub use config::GridConfig;
pub use error::{GridError, GridResult};
pub use graph::graph::Graph;
pub use graph::node::NodeId;
pub use graph::policy::CostPolicy;
pub use graph::topology::{Topology, build_from_edges, build_random};
pub use search::engine::{Route, Selection, ShortestPaths, shortest_paths, shortest_paths_with};
pub use search::path::reconstruct;
pub use session::session::GridSession;
