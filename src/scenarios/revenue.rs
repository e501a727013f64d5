//! Revenue target translation.
//!
//! Converts the plant's fixed monthly revenue targets into weekly pallet and
//! truck equivalents at the current bundle cost, and measures each
//! hours-scenario's production against them.

use serde::{Deserialize, Serialize};

use crate::config::{AnalysisParams, PlantConfig, WEEKS_PER_MONTH};
use crate::scenarios::throughput::ScenarioGroup;

/// One monthly revenue target translated into weekly logistics terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueTarget {
    /// The fixed monthly revenue target, in currency units.
    pub monthly_revenue: f64,
    /// Pallets per week needed to meet the target.
    pub weekly_pallet_target: f64,
    /// Trucks per week needed to move those pallets.
    pub weekly_truck_target: f64,
    /// One comparison row per hours-scenario, in scenario order.
    pub scenarios: Vec<TargetComparison>,
}

/// How one hours-scenario's production measures against a target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetComparison {
    /// Production hours per day for this scenario.
    pub production_hours_per_day: f64,
    /// Weekly production capacity in pallets for this scenario.
    pub total_production_pallets: f64,
    /// Production over the target's weekly pallet figure.
    pub ratio_to_target: f64,
    /// Signed weekly surplus (positive) or deficit (negative) in pallets.
    pub surplus_pallets: f64,
}

/// Value of one full pallet: the bundle cost times the reference product's
/// bundles per pallet.
#[must_use]
pub fn pallet_cost(avg_bundle_cost: f64, plant: &PlantConfig) -> f64 {
    avg_bundle_cost * plant.reference_product().pallet_capacity
}

/// Translate every plant revenue target and compare each hours-scenario
/// against it.
///
/// Monthly targets divide through the pallet cost and a four-week month to
/// land in pallets per week. A bundle cost of zero drives the pallet targets
/// to infinity; the comparisons then degrade to zero ratios, not faults.
#[must_use]
pub fn translate_targets(
    groups: &[ScenarioGroup],
    params: &AnalysisParams,
    plant: &PlantConfig,
) -> Vec<RevenueTarget> {
    let cost = pallet_cost(params.avg_bundle_cost, plant);

    plant
        .revenue_targets
        .iter()
        .map(|&monthly_revenue| {
            let weekly_pallet_target = monthly_revenue / cost / WEEKS_PER_MONTH;
            let weekly_truck_target = weekly_pallet_target / plant.pallets_per_truck;

            let scenarios = groups
                .iter()
                .map(|group| TargetComparison {
                    production_hours_per_day: group.production_hours_per_day,
                    total_production_pallets: group.total_production_pallets,
                    ratio_to_target: group.total_production_pallets / weekly_pallet_target,
                    surplus_pallets: group.total_production_pallets - weekly_pallet_target,
                })
                .collect();

            RevenueTarget {
                monthly_revenue,
                weekly_pallet_target,
                weekly_truck_target,
                scenarios,
            }
        })
        .collect()
}
