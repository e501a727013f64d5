//! Production-versus-outbound scenario grid.
//!
//! Cross-products the five production-hours variations with the truck-rate
//! sweep. Each combination carries its derived capacities, the ratio between
//! them, and the warehouse turnover time.

use serde::{Deserialize, Serialize};

use crate::config::{AnalysisParams, PlantConfig};
use crate::engine::sweep;

/// Derived metrics for one (production hours, trucks per week) combination.
///
/// Two structural facts hold across the grid: `total_production_pallets`
/// depends only on the hours value (it is identical for every truck-rate
/// sample within one hours-scenario), and `turnover_weeks` depends only on
/// the truck rate (it is identical across hours-scenarios at a fixed truck
/// value).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScenarioPoint {
    /// Production hours per day for this scenario.
    pub production_hours_per_day: f64,
    /// Outbound trucks per week at this sample.
    pub trucks_per_week: f64,
    /// Production hours per week.
    pub production_hours_per_week: f64,
    /// Weekly production capacity in pallets, summed over both products.
    pub total_production_pallets: f64,
    /// Weekly outbound capacity in pallets.
    pub outbound_pallets_per_week: f64,
    /// Production capacity over outbound capacity. Infinite when the truck
    /// rate is zero.
    pub capacity_ratio: f64,
    /// Weeks to move one full warehouse through the outbound dock. Infinite
    /// when the truck rate is zero.
    pub turnover_weeks: f64,
}

/// All truck-sweep samples sharing one production-hours value, truck-ordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioGroup {
    /// Production hours per day for this scenario.
    pub production_hours_per_day: f64,
    /// Weekly production capacity in pallets, constant across the group.
    pub total_production_pallets: f64,
    /// One point per truck-sweep sample, in sweep order.
    pub points: Vec<ScenarioPoint>,
}

/// Weekly production capacity in pallets for the given daily hours.
///
/// Sums, over both products, the pallets the packaging line can fill at the
/// derated bundle rate with the week's hours split by the mix ratio. Depends
/// only on the hours value, the mix, and the plant constants, never on the
/// truck rate.
#[must_use]
pub fn production_pallets_per_week(
    hours_per_day: f64,
    params: &AnalysisParams,
    plant: &PlantConfig,
) -> f64 {
    let hours_per_week = hours_per_day * params.production_days_per_week;
    let bundles_per_week = plant.actual_bundles_per_hour() * hours_per_week;

    plant
        .products
        .iter()
        .zip(params.mix_shares())
        .map(|(product, share)| bundles_per_week * share / product.pallet_capacity)
        .sum()
}

/// Build the full hours-variation × truck-sweep grid, grouped per
/// hours-scenario.
#[must_use]
pub fn build_scenario_groups(params: &AnalysisParams, plant: &PlantConfig) -> Vec<ScenarioGroup> {
    let trucks = sweep(params.trucks_min, params.trucks_max, params.sweep_points);

    params
        .hours_variations()
        .iter()
        .map(|&hours| {
            let total_production = production_pallets_per_week(hours, params, plant);
            let points = trucks
                .iter()
                .map(|&t| scenario_point(hours, t, total_production, params, plant))
                .collect();

            ScenarioGroup {
                production_hours_per_day: hours,
                total_production_pallets: total_production,
                points,
            }
        })
        .collect()
}

fn scenario_point(
    hours_per_day: f64,
    trucks_per_week: f64,
    total_production_pallets: f64,
    params: &AnalysisParams,
    plant: &PlantConfig,
) -> ScenarioPoint {
    let outbound_pallets_per_week = trucks_per_week * plant.pallets_per_truck;

    // A parked outbound dock is a legitimate input; the ratios degrade to an
    // infinite sentinel instead of faulting.
    let (capacity_ratio, turnover_weeks) = if outbound_pallets_per_week > 0.0 {
        (
            total_production_pallets / outbound_pallets_per_week,
            plant.warehouse_pallets / outbound_pallets_per_week,
        )
    } else {
        (f64::INFINITY, f64::INFINITY)
    };

    ScenarioPoint {
        production_hours_per_day: hours_per_day,
        trucks_per_week,
        production_hours_per_week: hours_per_day * params.production_days_per_week,
        total_production_pallets,
        outbound_pallets_per_week,
        capacity_ratio,
        turnover_weeks,
    }
}
