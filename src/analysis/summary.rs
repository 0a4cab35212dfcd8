use crate::graph::node::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostChange {
    Cheaper,
    Costlier,
    Same,
    Unreachable,
}

/// Standard against power-aware cost for one destination.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    node: NodeId,
    standard_cost: f64,
    power_cost: f64,
    improvement_pct: Option<f64>,
    change: CostChange,
}

impl ComparisonRow {
    pub fn new(
        node: NodeId,
        standard_cost: f64,
        power_cost: f64,
        improvement_pct: Option<f64>,
        change: CostChange,
    ) -> Self {
        Self {
            node,
            standard_cost,
            power_cost,
            improvement_pct,
            change,
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn standard_cost(&self) -> f64 {
        self.standard_cost
    }

    pub fn power_cost(&self) -> f64 {
        self.power_cost
    }

    /// (standard - power) / standard * 100, absent for the source and for
    /// unreachable nodes.
    pub fn improvement_pct(&self) -> Option<f64> {
        self.improvement_pct
    }

    pub fn change(&self) -> CostChange {
        self.change
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonSummary {
    reachable: usize,
    cheaper: usize,
    costlier: usize,
    mean_improvement_pct: Option<f64>,
}

impl ComparisonSummary {
    pub fn new(
        reachable: usize,
        cheaper: usize,
        costlier: usize,
        mean_improvement_pct: Option<f64>,
    ) -> Self {
        Self {
            reachable,
            cheaper,
            costlier,
            mean_improvement_pct,
        }
    }

    pub fn reachable(&self) -> usize {
        self.reachable
    }

    pub fn cheaper(&self) -> usize {
        self.cheaper
    }

    pub fn costlier(&self) -> usize {
        self.costlier
    }

    pub fn mean_improvement_pct(&self) -> Option<f64> {
        self.mean_improvement_pct
    }
}
