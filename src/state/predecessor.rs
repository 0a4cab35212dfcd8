use crate::graph::node::NodeId;
use std::collections::BTreeMap;

/// Predecessor of each node on its shortest path, forming a forest rooted
/// at the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredecessorTable {
    prev: BTreeMap<NodeId, Option<NodeId>>,
}

impl PredecessorTable {
    pub fn new(nodes: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            prev: nodes.into_iter().map(|id| (id, None)).collect(),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<NodeId> {
        self.prev.get(&id).copied().flatten()
    }

    pub(crate) fn set(&mut self, id: NodeId, prev: NodeId) {
        self.prev.insert(id, Some(prev));
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<NodeId>)> + '_ {
        self.prev.iter().map(|(id, p)| (*id, *p))
    }

    pub fn len(&self) -> usize {
        self.prev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prev.is_empty()
    }
}
