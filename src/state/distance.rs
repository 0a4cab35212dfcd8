use crate::graph::node::NodeId;
use std::collections::BTreeMap;

/// Shortest known distance from a fixed source. Unreachable nodes hold
/// `f64::INFINITY`.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceTable {
    distances: BTreeMap<NodeId, f64>,
}

impl DistanceTable {
    pub fn new(nodes: impl IntoIterator<Item = NodeId>, source: NodeId) -> Self {
        let mut distances: BTreeMap<NodeId, f64> =
            nodes.into_iter().map(|id| (id, f64::INFINITY)).collect();
        distances.insert(source, 0.0);
        Self { distances }
    }

    /// Distance to `id`, infinity when unreachable or unknown.
    pub fn get(&self, id: NodeId) -> f64 {
        self.distances.get(&id).copied().unwrap_or(f64::INFINITY)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.distances.contains_key(&id)
    }

    pub fn finite(&self, id: NodeId) -> Option<f64> {
        Some(self.get(id)).filter(|d| d.is_finite())
    }

    pub fn is_reachable(&self, id: NodeId) -> bool {
        self.get(id).is_finite()
    }

    pub(crate) fn set(&mut self, id: NodeId, distance: f64) {
        self.distances.insert(id, distance);
    }

    /// Entries in ascending node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.distances.iter().map(|(id, d)| (*id, *d))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
