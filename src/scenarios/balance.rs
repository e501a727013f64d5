//! Balanced-throughput solver.
//!
//! For each hours-scenario, finds the truck rate at which the capacity ratio
//! crosses 1.0 (production and outbound moving the same weekly pallet
//! volume) by inverse interpolation on the sampled ratio curve.

use serde::{Deserialize, Serialize};

use crate::config::PlantConfig;
use crate::engine::interpolate;
use crate::scenarios::throughput::ScenarioGroup;

/// The throughput at which production and outbound are balanced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BalancePoint {
    /// Trucks per week at capacity ratio 1.0.
    pub trucks_per_week: f64,
    /// Pallets per week moved at that truck rate.
    pub pallets_per_week: f64,
}

/// Balance result for one hours-scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// Production hours per day for this scenario.
    pub production_hours_per_day: f64,
    /// Weekly production capacity in pallets for this scenario.
    pub total_production_pallets: f64,
    /// The balanced point, or `None` when the sampled ratio range does not
    /// bracket 1.0.
    pub balance: Option<BalancePoint>,
}

/// Locate the balanced point for one scenario group.
///
/// The group's samples are ordered by capacity ratio and scanned for the
/// first segment spanning 1.0; the balanced truck rate is the inverse
/// interpolation of that segment (ratio as the x-axis, trucks as the
/// y-axis). Scenarios whose sweep lies entirely above or below ratio 1.0
/// report no balance point rather than extrapolating.
#[must_use]
pub fn solve_balance(group: &ScenarioGroup, plant: &PlantConfig) -> BalanceEntry {
    let mut samples: Vec<(f64, f64)> = group
        .points
        .iter()
        .map(|p| (p.capacity_ratio, p.trucks_per_week))
        .collect();
    samples.sort_by(|a, b| a.0.total_cmp(&b.0));

    let balance = bracket_at_unity(&samples).map(|trucks_per_week| BalancePoint {
        trucks_per_week,
        pallets_per_week: trucks_per_week * plant.pallets_per_truck,
    });

    BalanceEntry {
        production_hours_per_day: group.production_hours_per_day,
        total_production_pallets: group.total_production_pallets,
        balance,
    }
}

/// Solve every scenario group independently, in group order.
#[must_use]
pub fn solve_all(groups: &[ScenarioGroup], plant: &PlantConfig) -> Vec<BalanceEntry> {
    groups.iter().map(|g| solve_balance(g, plant)).collect()
}

/// Interpolated truck rate at ratio 1.0 from ratio-ascending samples, or
/// `None` when no segment brackets it.
fn bracket_at_unity(samples: &[(f64, f64)]) -> Option<f64> {
    let min_ratio = samples.first()?.0;
    let max_ratio = samples.last()?.0;
    if min_ratio > 1.0 || max_ratio < 1.0 {
        return None;
    }

    let upper = samples.iter().position(|&(ratio, _)| ratio >= 1.0)?;
    if upper == 0 {
        return None;
    }
    let lower = upper - 1;

    let ratios = [samples[lower].0, samples[upper].0];
    let trucks = [samples[lower].1, samples[upper].1];
    Some(interpolate(&ratios, &trucks, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisParams;
    use crate::scenarios::throughput::build_scenario_groups;

    fn reference_params() -> AnalysisParams {
        AnalysisParams::builder()
            .production_hours_per_day(16.0)
            .production_days_per_week(5.0)
            .product_mix_ratio(0.6)
            .hours_span(2.0)
            .truck_range(10.0, 30.0)
            .sweep_points(21)
            .build()
    }

    #[test]
    fn test_balance_reference_value() {
        let params = reference_params();
        let plant = PlantConfig::default();

        let groups = build_scenario_groups(&params, &plant);
        let entry = solve_balance(&groups[2], &plant); // 16 h/day

        // ~432 pallets/wk balances between 16 and 17 trucks
        let point = entry.balance.unwrap();
        assert!(
            point.trucks_per_week > 16.0 && point.trucks_per_week < 17.0,
            "balanced trucks = {}",
            point.trucks_per_week
        );
        assert!((point.trucks_per_week - 16.63).abs() < 0.05);
        assert!(
            (point.pallets_per_week - point.trucks_per_week * 26.0).abs() < 1e-9
        );
    }

    #[test]
    fn test_balance_not_found_when_all_ratios_above_one() {
        // A sweep of very low truck rates leaves production dominant
        let params = AnalysisParams::builder()
            .truck_range(1.0, 3.0)
            .sweep_points(5)
            .build();
        let plant = PlantConfig::default();

        for entry in solve_all(&build_scenario_groups(&params, &plant), &plant) {
            assert!(entry.balance.is_none());
        }
    }

    #[test]
    fn test_balance_not_found_when_all_ratios_below_one() {
        // A sweep of very high truck rates leaves outbound dominant
        let params = AnalysisParams::builder()
            .truck_range(100.0, 200.0)
            .sweep_points(5)
            .build();
        let plant = PlantConfig::default();

        for entry in solve_all(&build_scenario_groups(&params, &plant), &plant) {
            assert!(entry.balance.is_none());
        }
    }

    #[test]
    fn test_balance_independent_per_scenario() {
        let params = reference_params();
        let plant = PlantConfig::default();

        let entries = solve_all(&build_scenario_groups(&params, &plant), &plant);
        assert_eq!(entries.len(), 5);

        // Longer production days push the balance point to higher truck
        // rates; every default scenario brackets 1.0 within 10..30 trucks
        let trucks: Vec<f64> = entries
            .iter()
            .map(|e| e.balance.unwrap().trucks_per_week)
            .collect();
        assert!(trucks.windows(2).all(|w| w[0] < w[1]), "trucks = {trucks:?}");
    }

    #[test]
    fn test_balance_scales_with_production() {
        let params = reference_params();
        let plant = PlantConfig::default();

        let entries = solve_all(&build_scenario_groups(&params, &plant), &plant);
        for entry in entries {
            let point = entry.balance.unwrap();
            // At balance, outbound pallets equal production pallets up to
            // the error of linear interpolation on a 1/x-shaped curve
            let relative_error =
                (point.pallets_per_week - entry.total_production_pallets).abs()
                    / entry.total_production_pallets;
            assert!(relative_error < 0.01, "relative error = {relative_error}");
        }
    }

    #[test]
    fn test_balance_survives_infinite_ratio_samples() {
        // A sweep starting at zero trucks contributes an infinite ratio
        // sample; sorting pushes it to the top and the finite segment
        // bracketing 1.0 still resolves
        let params = AnalysisParams::builder()
            .truck_range(0.0, 30.0)
            .sweep_points(31)
            .build();
        let plant = PlantConfig::default();

        let groups = build_scenario_groups(&params, &plant);
        let entry = solve_balance(&groups[2], &plant);
        assert!(entry.balance.is_some());
    }

    #[test]
    fn test_balance_entry_serialization() {
        let params = reference_params();
        let plant = PlantConfig::default();

        let groups = build_scenario_groups(&params, &plant);
        let entry = solve_balance(&groups[0], &plant);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("balance"));

        let restored: BalanceEntry = serde_json::from_str(&json).unwrap();
        assert!(restored.balance.is_some());
    }

    #[test]
    fn test_bracket_at_unity_empty() {
        assert!(bracket_at_unity(&[]).is_none());
    }

    #[test]
    fn test_bracket_at_unity_exact_first_sample() {
        // Ratio 1.0 sitting on the first sample cannot be bracketed from the
        // left; the solver reports not-found rather than extrapolating
        let samples = [(1.0, 16.0), (1.5, 12.0)];
        assert!(bracket_at_unity(&samples).is_none());
    }
}
