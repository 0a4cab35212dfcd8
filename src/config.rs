use crate::error::{GridError, GridResult};
use crate::graph::policy::round2;
use std::ops::RangeInclusive;

/// Generation parameters for a random grid.
#[derive(Clone, Debug)]
pub struct GridConfig {
    pub num_nodes: usize,
    /// probability that any unordered node pair is linked, within [0, 1]
    pub density: f64,
    pub base_cost_range: RangeInclusive<f64>,
    pub power_range: RangeInclusive<f64>,
    /// fixed seed; `None` draws fresh topologies from entropy
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            num_nodes: 10,
            density: 0.4,
            base_cost_range: 1.0..=10.0,
            power_range: 0.5..=2.0,
            seed: None,
        }
    }
}

fn check_range(name: &str, range: &RangeInclusive<f64>) -> GridResult<()> {
    let (lo, hi) = (*range.start(), *range.end());
    if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi) {
        return Err(GridError::Config(format!(
            "{} must be a positive range, got {}..={}",
            name, lo, hi
        )));
    }
    Ok(())
}

impl GridConfig {
    pub fn validate(&self) -> GridResult<()> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(GridError::InvalidDensity(self.density));
        }
        check_range("base cost range", &self.base_cost_range)?;
        check_range("power range", &self.power_range)?;

        // cheapest edge between the two strongest nodes must not round to zero;
        // drawn values are rounded to cents, so widen the range outward first
        let max_power = (*self.power_range.end() * 100.0).ceil() / 100.0;
        let min_cost = (*self.base_cost_range.start() * 100.0).floor() / 100.0;
        let min_weight = round2(min_cost / (max_power * max_power));
        if min_weight <= 0.0 {
            return Err(GridError::Config(format!(
                "base cost {} over power {} rounds to a zero weight",
                min_cost, max_power
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_density_bounds() {
        for density in [-0.1, 1.01, f64::NAN] {
            let config = GridConfig {
                density,
                ..GridConfig::default()
            };
            assert!(matches!(config.validate(), Err(GridError::InvalidDensity(_))));
        }
        for density in [0.0, 1.0] {
            let config = GridConfig {
                density,
                ..GridConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_power_range_must_be_positive() {
        let config = GridConfig {
            power_range: 0.0..=2.0,
            ..GridConfig::default()
        };
        assert!(matches!(config.validate(), Err(GridError::Config(_))));

        let config = GridConfig {
            base_cost_range: 5.0..=1.0,
            ..GridConfig::default()
        };
        assert!(matches!(config.validate(), Err(GridError::Config(_))));
    }

    #[test]
    fn test_power_range_that_zeroes_weights_rejected() {
        // 1.0 / (20 * 20) rounds to 0.00
        let config = GridConfig {
            power_range: 10.0..=20.0,
            ..GridConfig::default()
        };
        assert!(matches!(config.validate(), Err(GridError::Config(_))));

        // 1.0 / (14 * 14) = 0.0051 still rounds to 0.01
        let config = GridConfig {
            power_range: 10.0..=14.0,
            ..GridConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
