use crate::graph::graph::Graph;
use crate::graph::node::NodeId;
use crate::state::predecessor::PredecessorTable;

/// Walks predecessor links back from `target`.
///
/// Returns the node sequence `source ..= target`, or an empty sequence when
/// the walk does not end at `source` (the target was never reached).
pub fn reconstruct(predecessors: &PredecessorTable, source: NodeId, target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = predecessors.get(current) {
        // a forest never has a chain longer than its node count
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        path.push(prev);
        current = prev;
    }
    if current != source {
        return Vec::new();
    }
    path.reverse();
    path
}

/// Sum of effective weights along `path`, accumulated from the source the
/// same way the engine relaxes. `None` if two consecutive nodes are not linked.
pub fn path_weight(graph: &Graph, path: &[NodeId]) -> Option<f64> {
    path.windows(2).try_fold(0.0, |acc, pair| {
        graph
            .edge_between(pair[0], pair[1])
            .map(|edge| acc + edge.weight())
    })
}
