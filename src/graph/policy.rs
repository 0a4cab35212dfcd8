use std::fmt;

/// Rounds to two decimal places, the precision every stored weight carries.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Maps an edge's base cost and its endpoints' power ratings to the weight
/// the shortest-path engine actually relaxes over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CostPolicy {
    /// weight = base_cost
    #[default]
    Identity,
    /// weight = base_cost / (power_u * power_v)
    PowerWeighted,
}

impl CostPolicy {
    pub fn weight(&self, base_cost: f64, power_u: f64, power_v: f64) -> f64 {
        match self {
            CostPolicy::Identity => round2(base_cost),
            CostPolicy::PowerWeighted => round2(base_cost / (power_u * power_v)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostPolicy::Identity => "standard",
            CostPolicy::PowerWeighted => "power-aware",
        }
    }
}

impl fmt::Display for CostPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_ignores_power() {
        assert_relative_eq!(7.25, CostPolicy::Identity.weight(7.25, 0.5, 2.0));
        assert_relative_eq!(7.25, CostPolicy::Identity.weight(7.25, 1.9, 0.6));
    }

    #[test]
    fn test_power_weighted_divides_by_power_product() {
        assert_relative_eq!(2.5, CostPolicy::PowerWeighted.weight(10.0, 2.0, 2.0));
        assert_relative_eq!(2.0, CostPolicy::PowerWeighted.weight(4.0, 1.0, 2.0));
    }

    #[test]
    fn test_power_weighted_rounds_to_cents() {
        // 10 / 0.9 = 11.111..
        assert_eq!(11.11, CostPolicy::PowerWeighted.weight(10.0, 1.0, 0.9));
        // 1 / 0.49 = 2.0408..
        assert_eq!(2.04, CostPolicy::PowerWeighted.weight(1.0, 0.7, 0.7));
    }

    #[test]
    fn test_power_weighted_never_above_identity_for_strong_nodes() {
        for base in [1.0, 3.33, 9.99] {
            for (pu, pv) in [(1.0, 1.0), (1.5, 1.0), (2.0, 1.25)] {
                assert!(
                    CostPolicy::PowerWeighted.weight(base, pu, pv)
                        <= CostPolicy::Identity.weight(base, pu, pv)
                );
            }
        }
    }
}
