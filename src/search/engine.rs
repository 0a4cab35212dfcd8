use crate::error::{GridError, GridResult};
use crate::graph::graph::Graph;
use crate::graph::node::NodeId;
use crate::search::path::reconstruct;
use crate::state::distance::DistanceTable;
use crate::state::predecessor::PredecessorTable;
use crate::state::snapshot::TraceLog;
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};
use std::fmt;
use std::time::{Duration, Instant};

/// How the next node to finalize is chosen. Both strategies pick the
/// unvisited node with the lowest distance, ties going to the lowest id, and
/// therefore produce identical tables and traces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Linear scan over all nodes, O(V²).
    #[default]
    Scan,
    /// Binary heap with lazy deletion of stale entries.
    Heap,
}

/// Path from the run's source to `target`; empty path and infinite cost
/// when unreachable.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub cost: f64,
}

impl Route {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_reachable() {
            return f.write_str("unreachable");
        }
        for (i, id) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}

/// Outcome of one single-source run.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: NodeId,
    distances: DistanceTable,
    predecessors: PredecessorTable,
    trace: TraceLog,
    elapsed: Duration,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn predecessors(&self) -> &PredecessorTable {
        &self.predecessors
    }

    pub fn trace(&self) -> &TraceLog {
        &self.trace
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn distance(&self, target: NodeId) -> f64 {
        self.distances.get(target)
    }

    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        reconstruct(&self.predecessors, self.source, target)
    }

    /// Route to one destination. Fails for a node the graph did not have
    /// when this run was computed.
    pub fn route_to(&self, target: NodeId) -> GridResult<Route> {
        if !self.distances.contains(target) {
            return Err(GridError::UnknownNode(target));
        }
        Ok(Route {
            target,
            path: self.path_to(target),
            cost: self.distance(target),
        })
    }

    /// Every reachable destination other than the source, ascending.
    pub fn routes(&self) -> Vec<Route> {
        self.distances
            .iter()
            .filter(|(id, d)| *id != self.source && d.is_finite())
            .map(|(target, cost)| Route {
                target,
                path: self.path_to(target),
                cost,
            })
            .collect()
    }

    pub fn reachable_count(&self) -> usize {
        self.trace.len()
    }
}

struct HeapEntry {
    distance: f64,
    node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    // reversed on both keys: the max-heap pops lowest distance, then lowest id
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

struct Run<'g> {
    graph: &'g Graph,
    distances: DistanceTable,
    predecessors: PredecessorTable,
    trace: TraceLog,
    visited: BTreeSet<NodeId>,
}

impl<'g> Run<'g> {
    fn new(graph: &'g Graph, source: NodeId) -> Self {
        Self {
            graph,
            distances: DistanceTable::new(graph.node_ids(), source),
            predecessors: PredecessorTable::new(graph.node_ids()),
            trace: TraceLog::new(),
            visited: BTreeSet::new(),
        }
    }

    fn next_by_scan(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, f64)> = None;
        for (id, d) in self.distances.iter() {
            if self.visited.contains(&id) || !d.is_finite() {
                continue;
            }
            // strict: the first (lowest) id wins a tie
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((id, d));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Finalizes `u` and relaxes its neighbours. Returns the nodes whose
    /// distance improved, with their new distance.
    fn settle(&mut self, u: NodeId) -> GridResult<Vec<(NodeId, f64)>> {
        self.visited.insert(u);
        self.trace.record(u, &self.distances);

        let dist_u = self.distances.get(u);
        trace!("step {}: finalized node {} at {}", self.trace.len() - 1, u, dist_u);

        let graph = self.graph;
        let mut improved = Vec::new();
        for (v, weight) in graph.neighbors(u)? {
            let candidate = dist_u + weight;
            if candidate < self.distances.get(v) {
                self.distances.set(v, candidate);
                self.predecessors.set(v, u);
                improved.push((v, candidate));
            }
        }
        Ok(improved)
    }

    fn run_scan(&mut self) -> GridResult<()> {
        while let Some(u) = self.next_by_scan() {
            self.settle(u)?;
        }
        Ok(())
    }

    fn run_heap(&mut self, source: NodeId) -> GridResult<()> {
        let mut heap = BinaryHeap::new();
        heap.push(HeapEntry {
            distance: 0.0,
            node: source,
        });
        while let Some(HeapEntry { distance, node }) = heap.pop() {
            if self.visited.contains(&node) || distance > self.distances.get(node) {
                continue;
            }
            for (v, d) in self.settle(node)? {
                heap.push(HeapEntry { distance: d, node: v });
            }
        }
        Ok(())
    }
}

/// Single-source shortest paths with the default linear-scan selection.
pub fn shortest_paths(graph: &Graph, source: NodeId) -> GridResult<ShortestPaths> {
    shortest_paths_with(graph, source, Selection::Scan)
}

pub fn shortest_paths_with(
    graph: &Graph,
    source: NodeId,
    selection: Selection,
) -> GridResult<ShortestPaths> {
    if !graph.contains(source) {
        return Err(GridError::UnknownNode(source));
    }

    let start = Instant::now();
    let mut run = Run::new(graph, source);
    match selection {
        Selection::Scan => run.run_scan()?,
        Selection::Heap => run.run_heap(source)?,
    }
    let elapsed = start.elapsed();

    debug!(
        "{} run from {}: {} of {} nodes reached in {:?}",
        graph.policy(),
        source,
        run.trace.len(),
        graph.node_count(),
        elapsed
    );

    Ok(ShortestPaths {
        source,
        distances: run.distances,
        predecessors: run.predecessors,
        trace: run.trace,
        elapsed,
    })
}
