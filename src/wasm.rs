//! WASM bindings for the warehouse what-if dashboard.
//!
//! Exposes a JavaScript-callable model holding the current slider values and
//! the latest report. Every setter recomputes synchronously, so the frontend
//! reads a consistent report immediately after any input event.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { WarehouseModel } from 'palletflow';
//!
//! async function main() {
//!     await init();
//!
//!     const model = new WarehouseModel();
//!     model.set_production_hours(16.0);
//!     model.set_truck_range(5.0, 30.0);
//!     const report = JSON.parse(model.report_json());
//!     console.log(report.balance);
//! }
//! ```

// WASM-bindgen exports don't need #[must_use] - values returned to JS
#![allow(clippy::must_use_candidate)]

use wasm_bindgen::prelude::*;

use crate::config::{AnalysisParams, PlantConfig};
use crate::scenarios::AnalysisReport;

/// WASM-exported warehouse what-if model.
#[wasm_bindgen]
pub struct WarehouseModel {
    params: AnalysisParams,
    plant: PlantConfig,
    report: AnalysisReport,
}

#[wasm_bindgen]
impl WarehouseModel {
    /// Create a model with default parameters and plant constants.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let params = AnalysisParams::default();
        let plant = PlantConfig::default();
        let report = AnalysisReport::compute(&params, &plant);
        Self {
            params,
            plant,
            report,
        }
    }

    /// Set the base production hours per day and recompute.
    pub fn set_production_hours(&mut self, hours_per_day: f64) {
        self.params.production_hours_per_day = hours_per_day;
        self.recompute();
    }

    /// Set the production days per week and recompute.
    pub fn set_production_days(&mut self, days_per_week: f64) {
        self.params.production_days_per_week = days_per_week;
        self.recompute();
    }

    /// Set the product mix ratio and recompute.
    pub fn set_product_mix(&mut self, ratio: f64) {
        self.params.product_mix_ratio = ratio;
        self.recompute();
    }

    /// Set the hours-variation span and recompute.
    pub fn set_hours_span(&mut self, span: f64) {
        self.params.hours_span = span;
        self.recompute();
    }

    /// Set the number of truck-sweep samples and recompute.
    pub fn set_sweep_points(&mut self, count: u32) {
        self.params.sweep_points = count as usize;
        self.recompute();
    }

    /// Set the truck-rate sweep bounds and recompute.
    pub fn set_truck_range(&mut self, min: f64, max: f64) {
        self.params.trucks_min = min;
        self.params.trucks_max = max;
        self.recompute();
    }

    /// Set the average bundle cost and recompute.
    pub fn set_bundle_cost(&mut self, cost: f64) {
        self.params.avg_bundle_cost = cost;
        self.recompute();
    }

    /// Recompute the report from the current parameters.
    pub fn recompute(&mut self) {
        self.report = AnalysisReport::compute(&self.params, &self.plant);
    }

    /// The full report as JSON.
    pub fn report_json(&self) -> String {
        serde_json::to_string(&self.report).unwrap_or_default()
    }

    /// The balance table as JSON.
    pub fn balance_json(&self) -> String {
        serde_json::to_string(&self.report.balance).unwrap_or_default()
    }

    /// The revenue analysis as JSON.
    pub fn revenue_json(&self) -> String {
        serde_json::to_string(&self.report.revenue).unwrap_or_default()
    }

    /// Number of hours-scenarios in the current report.
    pub fn scenario_count(&self) -> usize {
        self.report.scenarios.len()
    }
}

impl Default for WarehouseModel {
    fn default() -> Self {
        Self::new()
    }
}
