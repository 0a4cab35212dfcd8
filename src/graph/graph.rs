use crate::error::{GridError, GridResult};
use crate::graph::edge::{Edge, EdgeId};
use crate::graph::node::{Node, NodeId};
use crate::graph::policy::CostPolicy;
use crate::graph::topology::Topology;
use log::{debug, warn};
use std::collections::{BTreeMap, HashSet};

/// Undirected, simple graph permanently bound to one [`CostPolicy`].
///
/// Effective weights are computed once, when an edge is inserted, so every
/// query over the graph relaxes the same stored values.
#[derive(Clone, Debug)]
pub struct Graph {
    policy: CostPolicy,
    nodes: BTreeMap<NodeId, Node>,
    edges: Vec<Edge>,
    adj: BTreeMap<NodeId, Vec<EdgeId>>,
    pairs: HashSet<(NodeId, NodeId)>,
}

fn pair_key(u: NodeId, v: NodeId) -> (NodeId, NodeId) {
    if u <= v { (u, v) } else { (v, u) }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Graph {
    pub fn new(policy: CostPolicy) -> Self {
        Self {
            policy,
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            adj: BTreeMap::new(),
            pairs: HashSet::new(),
        }
    }

    /// Builds a graph over `topology`, weighting every edge through `policy`.
    pub fn from_topology(topology: &Topology, policy: CostPolicy) -> GridResult<Self> {
        let mut graph = Graph::new(policy);
        for (id, power) in topology.powers() {
            graph.add_node_with_power(*id, *power)?;
        }
        for (u, v, base_cost) in topology.edges() {
            graph.add_edge(*u, *v, *base_cost)?;
        }
        debug!(
            "built {} graph: {} nodes, {} edges",
            policy,
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    pub fn policy(&self) -> CostPolicy {
        self.policy
    }

    /// Adds an isolated node with the neutral power rating.
    pub fn add_node(&mut self, id: NodeId) -> GridResult<()> {
        self.add_node_with_power(id, Node::DEFAULT_POWER)
    }

    pub fn add_node_with_power(&mut self, id: NodeId, power: f64) -> GridResult<()> {
        if self.nodes.contains_key(&id) {
            warn!("rejected node {}: already present", id);
            return Err(GridError::DuplicateNode(id));
        }
        if !is_positive(power) {
            warn!("rejected node {}: power {}", id, power);
            return Err(GridError::InvalidPower(id, power));
        }
        self.nodes.insert(id, Node::new(id, power));
        self.adj.insert(id, Vec::new());
        Ok(())
    }

    pub fn add_edge(&mut self, u: NodeId, v: NodeId, base_cost: f64) -> GridResult<EdgeId> {
        let (power_u, power_v) = match (self.nodes.get(&u), self.nodes.get(&v)) {
            (Some(a), Some(b)) => (a.power(), b.power()),
            (None, _) | (_, None) => {
                let unknown = if self.contains(u) { v } else { u };
                warn!("rejected edge {} - {}: unknown node {}", u, v, unknown);
                return Err(GridError::UnknownNode(unknown));
            }
        };
        if u == v {
            warn!("rejected edge {} - {}: self-loop", u, v);
            return Err(GridError::SelfLoop(u));
        }
        if !is_positive(base_cost) {
            warn!("rejected edge {} - {}: base cost {}", u, v, base_cost);
            return Err(GridError::InvalidWeight(base_cost));
        }
        let key = pair_key(u, v);
        if self.pairs.contains(&key) {
            warn!("rejected edge {} - {}: already present", u, v);
            return Err(GridError::DuplicateEdge(key.0, key.1));
        }

        let weight = self.policy.weight(base_cost, power_u, power_v);
        // rounding can collapse a tiny cost to zero
        if !is_positive(weight) {
            warn!("rejected edge {} - {}: effective weight {}", u, v, weight);
            return Err(GridError::ZeroWeight {
                from: u,
                to: v,
                base_cost,
                weight,
            });
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(id, u, v, base_cost, weight));
        self.pairs.insert(key);
        self.adj.entry(u).or_default().push(id);
        self.adj.entry(v).or_default().push(id);
        Ok(id)
    }

    /// Neighbours of `id` with the effective weight of the connecting edge,
    /// in edge insertion order.
    pub fn neighbors(&self, id: NodeId) -> GridResult<impl Iterator<Item = (NodeId, f64)> + '_> {
        let edge_ids = self.adj.get(&id).ok_or(GridError::UnknownNode(id))?;
        Ok(edge_ids.iter().map(move |e_id| {
            let edge = &self.edges[e_id.index()];
            (edge.opposite(id), edge.weight())
        }))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_by_id(&self, id: NodeId) -> GridResult<&Node> {
        self.nodes.get(&id).ok_or(GridError::UnknownNode(id))
    }

    pub fn edge_by_id(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn edge_between(&self, u: NodeId, v: NodeId) -> Option<&Edge> {
        self.adj
            .get(&u)?
            .iter()
            .map(|e_id| &self.edges[e_id.index()])
            .find(|e| e.opposite(u) == v)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The policy-independent description of this graph: powers and base costs.
    pub fn topology(&self) -> Topology {
        Topology::new(
            self.nodes.values().map(|n| (n.id(), n.power())).collect(),
            self.edges
                .iter()
                .map(|e| (e.from(), e.to(), e.base_cost()))
                .collect(),
        )
    }
}
