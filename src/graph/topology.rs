use crate::config::GridConfig;
use crate::error::{GridError, GridResult};
use crate::graph::graph::Graph;
use crate::graph::node::NodeId;
use crate::graph::policy::{CostPolicy, round2};
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::ops::RangeInclusive;

/// Nodes with their power ratings and edges with their base costs.
///
/// Carries no cost policy, so the same topology can back a standard and a
/// power-aware graph that differ only in effective weights.
#[derive(Clone, Debug, PartialEq)]
pub struct Topology {
    powers: Vec<(NodeId, f64)>,
    edges: Vec<(NodeId, NodeId, f64)>,
}

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn random_powers<R: Rng>(num_nodes: usize, range: &RangeInclusive<f64>, rng: &mut R) -> Vec<f64> {
    (0..num_nodes)
        .map(|_| round2(rng.gen_range(range.clone())))
        .collect()
}

impl Topology {
    pub fn new(powers: Vec<(NodeId, f64)>, edges: Vec<(NodeId, NodeId, f64)>) -> Self {
        Self { powers, edges }
    }

    /// Draws node powers, then visits every unordered pair `i < j` in
    /// ascending order and links it with probability `config.density`.
    pub fn random<R: Rng>(config: &GridConfig, rng: &mut R) -> GridResult<Self> {
        config.validate()?;
        let n = config.num_nodes;

        let powers = random_powers(n, &config.power_range, rng);

        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.r#gen::<f64>() < config.density {
                    let base_cost = round2(rng.gen_range(config.base_cost_range.clone()));
                    edges.push((NodeId(i), NodeId(j), base_cost));
                }
            }
        }

        Ok(Self {
            powers: powers.into_iter().enumerate().map(|(i, p)| (NodeId(i), p)).collect(),
            edges,
        })
    }

    /// Explicit edge list over nodes `0..num_nodes`. Missing powers are drawn
    /// from `power_range`.
    pub fn from_edges<R: Rng>(
        num_nodes: usize,
        edges: &[(usize, usize, f64)],
        powers: Option<&[f64]>,
        power_range: &RangeInclusive<f64>,
        rng: &mut R,
    ) -> GridResult<Self> {
        let powers = match powers {
            Some(p) if p.len() != num_nodes => {
                return Err(GridError::PowerCountMismatch {
                    expected: num_nodes,
                    actual: p.len(),
                });
            }
            Some(p) => p.to_vec(),
            None => random_powers(num_nodes, power_range, rng),
        };

        Ok(Self {
            powers: powers.into_iter().enumerate().map(|(i, p)| (NodeId(i), p)).collect(),
            edges: edges
                .iter()
                .map(|(u, v, cost)| (NodeId(*u), NodeId(*v), *cost))
                .collect(),
        })
    }

    pub fn powers(&self) -> &[(NodeId, f64)] {
        &self.powers
    }

    pub fn edges(&self) -> &[(NodeId, NodeId, f64)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.powers.len()
    }
}

/// Random graph bound to `policy`. A given `seed` always yields the same
/// topology regardless of policy.
pub fn build_random(config: &GridConfig, policy: CostPolicy, seed: Option<u64>) -> GridResult<Graph> {
    let mut rng = seeded_rng(seed);
    let topology = Topology::random(config, &mut rng)?;
    debug!(
        "random topology: {} nodes, {} edges, density {}, seed {:?}",
        topology.node_count(),
        topology.edges().len(),
        config.density,
        seed
    );
    Graph::from_topology(&topology, policy)
}

/// Graph over an explicit edge list; base costs are used as given.
pub fn build_from_edges(
    num_nodes: usize,
    edges: &[(usize, usize, f64)],
    powers: Option<&[f64]>,
    policy: CostPolicy,
    seed: Option<u64>,
) -> GridResult<Graph> {
    let mut rng = seeded_rng(seed);
    let power_range = GridConfig::default().power_range;
    let topology = Topology::from_edges(num_nodes, edges, powers, &power_range, &mut rng)?;
    Graph::from_topology(&topology, policy)
}
