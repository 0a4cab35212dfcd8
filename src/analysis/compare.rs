use crate::analysis::summary::{ComparisonRow, ComparisonSummary, CostChange};
use crate::error::GridResult;
use crate::graph::graph::Graph;
use crate::graph::node::NodeId;
use crate::search::engine::{ShortestPaths, shortest_paths};
use log::debug;

const EPSILON: f64 = 1e-9;

/// Both runs from one source plus the per-node cost rows.
#[derive(Clone, Debug)]
pub struct Comparison {
    standard: ShortestPaths,
    power_aware: ShortestPaths,
    rows: Vec<ComparisonRow>,
}

impl Comparison {
    pub fn source(&self) -> NodeId {
        self.standard.source()
    }

    pub fn standard(&self) -> &ShortestPaths {
        &self.standard
    }

    pub fn power_aware(&self) -> &ShortestPaths {
        &self.power_aware
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    pub fn summary(&self) -> ComparisonSummary {
        let targets = self
            .rows
            .iter()
            .filter(|r| r.node() != self.source() && r.change() != CostChange::Unreachable);
        let (reachable, cheaper, costlier) =
            targets.clone().fold((0, 0, 0), |(n, c, w), r| match r.change() {
                CostChange::Cheaper => (n + 1, c + 1, w),
                CostChange::Costlier => (n + 1, c, w + 1),
                _ => (n + 1, c, w),
            });
        let pcts: Vec<f64> = targets.filter_map(|r| r.improvement_pct()).collect();
        let mean = if pcts.is_empty() {
            None
        } else {
            Some(pcts.iter().sum::<f64>() / pcts.len() as f64)
        };
        ComparisonSummary::new(reachable, cheaper, costlier, mean)
    }
}

fn classify(standard: f64, power: f64) -> CostChange {
    if !standard.is_finite() || !power.is_finite() {
        CostChange::Unreachable
    } else if power < standard - EPSILON {
        CostChange::Cheaper
    } else if power > standard + EPSILON {
        CostChange::Costlier
    } else {
        CostChange::Same
    }
}

fn improvement(standard: f64, power: f64) -> Option<f64> {
    if standard.is_finite() && power.is_finite() && standard > 0.0 {
        Some((standard - power) / standard * 100.0)
    } else {
        None
    }
}

/// Runs the engine over both graphs from `source`. The graphs are expected
/// to share one topology; rows cover the standard graph's nodes.
pub fn compare(standard: &Graph, power_aware: &Graph, source: NodeId) -> GridResult<Comparison> {
    let std_run = shortest_paths(standard, source)?;
    let pow_run = shortest_paths(power_aware, source)?;

    let rows = std_run
        .distances()
        .iter()
        .map(|(node, std_cost)| {
            let pow_cost = pow_run.distance(node);
            ComparisonRow::new(
                node,
                std_cost,
                pow_cost,
                improvement(std_cost, pow_cost),
                classify(std_cost, pow_cost),
            )
        })
        .collect::<Vec<_>>();

    debug!(
        "compared {} nodes from {}: standard {:?}, power-aware {:?}",
        rows.len(),
        source,
        std_run.elapsed(),
        pow_run.elapsed()
    );

    Ok(Comparison {
        standard: std_run,
        power_aware: pow_run,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::policy::CostPolicy;
    use crate::graph::topology::build_from_edges;
    use approx::assert_relative_eq;

    fn graphs(edges: &[(usize, usize, f64)], powers: &[f64]) -> (Graph, Graph) {
        let n = powers.len();
        (
            build_from_edges(n, edges, Some(powers), CostPolicy::Identity, None).unwrap(),
            build_from_edges(n, edges, Some(powers), CostPolicy::PowerWeighted, None).unwrap(),
        )
    }

    #[test]
    fn test_rows_per_node() {
        let (std_g, pow_g) = graphs(
            &[(0, 1, 4.0), (1, 2, 1.0), (0, 2, 10.0), (2, 3, 2.0)],
            &[1.0, 2.0, 1.0, 1.0],
        );
        let comparison = compare(&std_g, &pow_g, NodeId(0)).unwrap();
        let rows = comparison.rows();

        assert_eq!(4, rows.len());
        assert_eq!(CostChange::Same, rows[0].change());
        assert_eq!(None, rows[0].improvement_pct());

        assert_relative_eq!(4.0, rows[1].standard_cost());
        assert_relative_eq!(2.0, rows[1].power_cost());
        assert_eq!(CostChange::Cheaper, rows[1].change());
        assert_relative_eq!(50.0, rows[1].improvement_pct().unwrap());

        // 7.0 -> 4.5
        assert_relative_eq!(
            (7.0 - 4.5) / 7.0 * 100.0,
            rows[3].improvement_pct().unwrap()
        );
    }

    #[test]
    fn test_weak_nodes_make_routes_costlier() {
        let (std_g, pow_g) = graphs(&[(0, 1, 3.0)], &[0.5, 1.0]);
        let comparison = compare(&std_g, &pow_g, NodeId(0)).unwrap();

        let row = &comparison.rows()[1];
        assert_relative_eq!(6.0, row.power_cost());
        assert_eq!(CostChange::Costlier, row.change());
        assert_relative_eq!(-100.0, row.improvement_pct().unwrap());
    }

    #[test]
    fn test_unreachable_rows() {
        let (std_g, pow_g) = graphs(&[(0, 1, 3.0)], &[1.0, 1.0, 1.0]);
        let comparison = compare(&std_g, &pow_g, NodeId(0)).unwrap();

        let row = &comparison.rows()[2];
        assert_eq!(CostChange::Unreachable, row.change());
        assert_eq!(None, row.improvement_pct());
        assert!(row.standard_cost().is_infinite());
    }

    #[test]
    fn test_summary_counts() {
        // node 1 cheaper, node 2 costlier, node 3 unreachable
        let (std_g, pow_g) = graphs(&[(0, 1, 4.0), (0, 2, 4.0)], &[1.0, 2.0, 0.5, 1.0]);
        let summary = compare(&std_g, &pow_g, NodeId(0)).unwrap().summary();

        assert_eq!(2, summary.reachable());
        assert_eq!(1, summary.cheaper());
        assert_eq!(1, summary.costlier());
        // (50 + -100) / 2
        assert_relative_eq!(-25.0, summary.mean_improvement_pct().unwrap());
    }

    #[test]
    fn test_unknown_source() {
        let (std_g, pow_g) = graphs(&[(0, 1, 3.0)], &[1.0, 1.0]);
        assert!(compare(&std_g, &pow_g, NodeId(5)).is_err());
    }
}
