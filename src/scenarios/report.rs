//! Full recompute and report assembly.

use serde::{Deserialize, Serialize};

use crate::config::{AnalysisParams, PlantConfig};
use crate::scenarios::balance::{solve_all, BalanceEntry};
use crate::scenarios::revenue::{pallet_cost, translate_targets, RevenueTarget};
use crate::scenarios::throughput::{build_scenario_groups, ScenarioGroup};

/// Complete output of one warehouse throughput recompute.
///
/// Everything the presentation layer renders (scenario curves, balance
/// table, revenue analysis) comes out of one call to
/// [`AnalysisReport::compute`]. The report is a value: recomputing replaces
/// it wholesale, and the same inputs always produce the same report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The normalized parameters this report was computed from.
    pub params: AnalysisParams,
    /// Value of one reference pallet at the current bundle cost.
    pub pallet_cost: f64,
    /// Scenario grid, one group per production-hours variation.
    pub scenarios: Vec<ScenarioGroup>,
    /// Balance result per hours-scenario, in scenario order.
    pub balance: Vec<BalanceEntry>,
    /// Revenue targets with weekly equivalents and per-scenario comparisons.
    pub revenue: Vec<RevenueTarget>,
}

impl AnalysisReport {
    /// Run one full, stateless recompute.
    ///
    /// Parameters pass through [`AnalysisParams::normalized`] first, so the
    /// computation always sees boundary-clamped input regardless of caller.
    #[must_use]
    pub fn compute(params: &AnalysisParams, plant: &PlantConfig) -> Self {
        let params = params.normalized();

        let scenarios = build_scenario_groups(&params, plant);
        let balance = solve_all(&scenarios, plant);
        let revenue = translate_targets(&scenarios, &params, plant);

        Self {
            pallet_cost: pallet_cost(params.avg_bundle_cost, plant),
            params,
            scenarios,
            balance,
            revenue,
        }
    }
}
