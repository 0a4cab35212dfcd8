use crate::analysis::compare::{Comparison, compare};
use crate::config::GridConfig;
use crate::error::GridResult;
use crate::graph::edge::EdgeId;
use crate::graph::graph::Graph;
use crate::graph::node::{Node, NodeId};
use crate::graph::policy::CostPolicy;
use crate::graph::topology::{Topology, seeded_rng};
use log::{debug, info};
use rand::{Rng, rngs::StdRng};

/// Caller-owned pair of graphs over one topology: one weighted by the
/// identity policy, one power-weighted.
///
/// Every generation draws its topology seed from the session's own rng, so a
/// session created with a fixed `config.seed` replays the same sequence of
/// topologies. Mutations are applied to both graphs or to neither.
pub struct GridSession {
    config: GridConfig,
    rng: StdRng,
    seed: Option<u64>,
    standard: Graph,
    power_aware: Graph,
}

fn bind(topology: &Topology) -> GridResult<(Graph, Graph)> {
    Ok((
        Graph::from_topology(topology, CostPolicy::Identity)?,
        Graph::from_topology(topology, CostPolicy::PowerWeighted)?,
    ))
}

impl GridSession {
    pub fn new(config: GridConfig) -> GridResult<Self> {
        config.validate()?;
        let mut rng = seeded_rng(config.seed);
        let seed = rng.r#gen::<u64>();
        let topology = Topology::random(&config, &mut seeded_rng(Some(seed)))?;
        let (standard, power_aware) = bind(&topology)?;
        info!(
            "session created: {} nodes, {} edges, seed {}",
            standard.node_count(),
            standard.edge_count(),
            seed
        );
        Ok(Self {
            config,
            rng,
            seed: Some(seed),
            standard,
            power_aware,
        })
    }

    /// Session over an explicit edge list. Missing powers are drawn from the
    /// configured power range.
    pub fn from_edges(
        config: GridConfig,
        edges: &[(usize, usize, f64)],
        powers: Option<&[f64]>,
    ) -> GridResult<Self> {
        config.validate()?;
        let mut rng = seeded_rng(config.seed);
        let topology =
            Topology::from_edges(config.num_nodes, edges, powers, &config.power_range, &mut rng)?;
        let (standard, power_aware) = bind(&topology)?;
        Ok(Self {
            config,
            rng,
            seed: None,
            standard,
            power_aware,
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Seed of the current random topology, `None` for explicit edge lists.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn standard(&self) -> &Graph {
        &self.standard
    }

    pub fn power_aware(&self) -> &Graph {
        &self.power_aware
    }

    pub fn topology(&self) -> Topology {
        self.standard.topology()
    }

    /// Replaces both graphs with a fresh random topology.
    pub fn regenerate(&mut self) -> GridResult<u64> {
        let seed = self.rng.r#gen::<u64>();
        self.regenerate_with_seed(seed)?;
        Ok(seed)
    }

    pub fn regenerate_with_seed(&mut self, seed: u64) -> GridResult<()> {
        let topology = Topology::random(&self.config, &mut seeded_rng(Some(seed)))?;
        let (standard, power_aware) = bind(&topology)?;
        self.standard = standard;
        self.power_aware = power_aware;
        self.seed = Some(seed);
        debug!(
            "regenerated: {} edges, seed {}",
            self.standard.edge_count(),
            seed
        );
        Ok(())
    }

    /// Applies new generation parameters and regenerates.
    pub fn reconfigure(&mut self, config: GridConfig) -> GridResult<u64> {
        config.validate()?;
        self.config = config;
        self.regenerate()
    }

    pub fn add_node(&mut self, id: NodeId) -> GridResult<()> {
        self.add_node_with_power(id, Node::DEFAULT_POWER)
    }

    pub fn add_node_with_power(&mut self, id: NodeId, power: f64) -> GridResult<()> {
        // identical node sets: whatever the standard graph accepts, so does the other
        self.standard.add_node_with_power(id, power)?;
        self.power_aware.add_node_with_power(id, power)
    }

    pub fn add_edge(&mut self, u: NodeId, v: NodeId, base_cost: f64) -> GridResult<EdgeId> {
        // the power-aware weight may round to zero where the standard one does not
        let mut standard = self.standard.clone();
        let id = standard.add_edge(u, v, base_cost)?;
        self.power_aware.add_edge(u, v, base_cost)?;
        self.standard = standard;
        Ok(id)
    }

    pub fn compare(&self, source: NodeId) -> GridResult<Comparison> {
        compare(&self.standard, &self.power_aware, source)
    }
}
