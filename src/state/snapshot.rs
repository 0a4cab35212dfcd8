use crate::graph::node::NodeId;
use crate::state::distance::DistanceTable;

/// One finalized node with a value copy of the distance table taken when it
/// was finalized, before its neighbours were relaxed.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceStep {
    step: usize,
    visited: NodeId,
    distances: DistanceTable,
}

impl TraceStep {
    pub fn new(step: usize, visited: NodeId, distances: DistanceTable) -> Self {
        Self {
            step,
            visited,
            distances,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn visited(&self) -> NodeId {
        self.visited
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Distance of the node finalized at this step.
    pub fn visited_distance(&self) -> f64 {
        self.distances.get(self.visited)
    }
}

/// Finalization order of a shortest-path run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TraceLog {
    steps: Vec<TraceStep>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn record(&mut self, visited: NodeId, distances: &DistanceTable) {
        let step = self.steps.len();
        self.steps.push(TraceStep::new(step, visited, distances.clone()));
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn get(&self, step: usize) -> Option<&TraceStep> {
        self.steps.get(step)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn visit_order(&self) -> Vec<NodeId> {
        self.steps.iter().map(|s| s.visited()).collect()
    }
}
