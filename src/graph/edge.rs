use crate::graph::node::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Undirected link. `from` and `to` only record insertion order.
#[derive(Clone, Debug)]
pub struct Edge {
    id: EdgeId,
    from: NodeId,
    to: NodeId,
    /// base_cost > 0.0
    base_cost: f64,
    /// weight > 0.0, fixed by the graph's cost policy
    weight: f64,
}

impl Edge {
    pub fn new(id: EdgeId, from: NodeId, to: NodeId, base_cost: f64, weight: f64) -> Self {
        Self {
            id,
            from,
            to,
            base_cost,
            weight,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The endpoint across from `node`.
    pub fn opposite(&self, node: NodeId) -> NodeId {
        if self.from == node { self.to } else { self.from }
    }
}
