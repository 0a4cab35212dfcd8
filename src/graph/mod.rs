pub mod edge;
pub mod graph;
pub mod node;
pub mod policy;
pub mod topology;
