//! Plant constants and analysis parameters.
//!
//! Mistake-proofing through:
//! - Type-safe configuration structs
//! - Compile-time validation via serde
//! - Runtime semantic validation
//!
//! [`PlantConfig`] holds the fixed physical constants of the site (warehouse
//! capacity, truck capacity, packaging speed, product geometry, revenue
//! targets). It is injected into every computation rather than read from
//! ambient globals, so tests can run with alternate constants.
//!
//! [`AnalysisParams`] holds the per-recompute inputs (the slider surface of
//! the dashboard that consumes this crate).

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{FlowError, FlowResult};

/// Floor applied to every production-hours scenario value.
///
/// Keeps the hours-variation fan strictly positive when a wide span is
/// applied to a small base value.
pub const MIN_PRODUCTION_HOURS: f64 = 0.1;

/// Weeks per month used when converting monthly revenue targets to weekly
/// logistics figures.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Packaging geometry for one product code.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductSpec {
    /// Product code, e.g. `16OC` for the 16-unit carton.
    #[validate(length(min = 1))]
    pub code: String,
    /// Bundles that fit on one pallet.
    #[validate(range(min = 1.0))]
    pub pallet_capacity: f64,
}

impl ProductSpec {
    /// Create a product spec.
    #[must_use]
    pub fn new(code: impl Into<String>, pallet_capacity: f64) -> Self {
        Self {
            code: code.into(),
            pallet_capacity,
        }
    }
}

/// Fixed physical constants of the plant and warehouse.
///
/// Immutable for the lifetime of a process; loaded once from YAML or taken
/// from [`Default`], then passed by reference into every recompute.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PlantConfig {
    /// Warehouse storage capacity in pallets.
    #[validate(range(min = 1.0))]
    #[serde(default = "default_warehouse_pallets")]
    pub warehouse_pallets: f64,

    /// Pallets carried by one outbound truck.
    #[validate(range(min = 1.0))]
    #[serde(default = "default_pallets_per_truck")]
    pub pallets_per_truck: f64,

    /// Maximum packaging time per bundle in seconds (recipe limit).
    #[validate(range(min = 1.0))]
    #[serde(default = "default_packaging_max_secs")]
    pub packaging_max_secs_per_bundle: f64,

    /// Derating factor applied to the recipe-limit packaging speed,
    /// in (0, 1].
    #[serde(default = "default_derating_factor")]
    pub speed_derating_factor: f64,

    /// The two product types sharing the packaging line. The first entry is
    /// the reference product for pallet costing.
    #[validate(nested)]
    #[serde(default = "default_products")]
    pub products: Vec<ProductSpec>,

    /// Fixed monthly revenue targets, in currency units, ascending.
    #[serde(default = "default_revenue_targets")]
    pub revenue_targets: Vec<f64>,
}

const fn default_warehouse_pallets() -> f64 {
    700.0
}

const fn default_pallets_per_truck() -> f64 {
    26.0
}

const fn default_packaging_max_secs() -> f64 {
    35.0
}

const fn default_derating_factor() -> f64 {
    0.9
}

fn default_products() -> Vec<ProductSpec> {
    vec![
        ProductSpec::new("16OC", 24.0),
        ProductSpec::new("24OC", 12.0),
    ]
}

fn default_revenue_targets() -> Vec<f64> {
    vec![500_000.0, 750_000.0, 1_000_000.0]
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            warehouse_pallets: default_warehouse_pallets(),
            pallets_per_truck: default_pallets_per_truck(),
            packaging_max_secs_per_bundle: default_packaging_max_secs(),
            speed_derating_factor: default_derating_factor(),
            products: default_products(),
            revenue_targets: default_revenue_targets(),
        }
    }
}

impl PlantConfig {
    /// Load plant constants from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML does not parse,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> FlowResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse plant constants from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> FlowResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Validate semantic constraints beyond the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the derating factor is outside (0, 1], the
    /// product list does not describe exactly two products, or the revenue
    /// target list is empty.
    pub fn validate_semantic(&self) -> FlowResult<()> {
        if self.speed_derating_factor <= 0.0 || self.speed_derating_factor > 1.0 {
            return Err(FlowError::config(format!(
                "Speed derating factor must be in (0, 1], got {}",
                self.speed_derating_factor
            )));
        }

        if self.products.len() != 2 {
            return Err(FlowError::config(format!(
                "Product mix splits the line between exactly two products, got {}",
                self.products.len()
            )));
        }

        if self.revenue_targets.is_empty() {
            return Err(FlowError::config("At least one revenue target required"));
        }

        Ok(())
    }

    /// Sustainable packaging rate in bundles per hour: the recipe-limit rate
    /// derated by the production buffer factor.
    #[must_use]
    pub fn actual_bundles_per_hour(&self) -> f64 {
        (3600.0 / self.packaging_max_secs_per_bundle) * self.speed_derating_factor
    }

    /// The reference product used for pallet costing.
    ///
    /// # Panics
    ///
    /// Panics if the product list is empty. Validated configurations always
    /// carry two products.
    #[must_use]
    pub fn reference_product(&self) -> &ProductSpec {
        &self.products[0]
    }
}

/// Inputs for one what-if recompute.
///
/// All fields are plain numbers as delivered by the dashboard sliders.
/// [`AnalysisParams::validate`] rejects out-of-range values for callers that
/// want hard errors; [`AnalysisParams::normalized`] clamps them for callers
/// that want the boundary behavior of the interactive dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AnalysisParams {
    /// Base production hours per day.
    #[serde(default = "default_hours_per_day")]
    pub production_hours_per_day: f64,

    /// Production days per week.
    #[serde(default = "default_days_per_week")]
    pub production_days_per_week: f64,

    /// Share of production going to the first product type, in [0, 1].
    /// The second product type receives the remainder.
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_mix_ratio")]
    pub product_mix_ratio: f64,

    /// Offset between adjacent production-hours scenarios, in hours.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_hours_span")]
    pub hours_span: f64,

    /// Number of samples in the truck-rate sweep.
    #[validate(range(min = 1))]
    #[serde(default = "default_sweep_points")]
    pub sweep_points: usize,

    /// Lower bound of the truck-rate sweep, trucks per week.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_trucks_min")]
    pub trucks_min: f64,

    /// Upper bound of the truck-rate sweep, trucks per week.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_trucks_max")]
    pub trucks_max: f64,

    /// Average cost of one bundle, in currency units.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_bundle_cost")]
    pub avg_bundle_cost: f64,
}

const fn default_hours_per_day() -> f64 {
    16.0
}

const fn default_days_per_week() -> f64 {
    5.0
}

const fn default_mix_ratio() -> f64 {
    0.6
}

const fn default_hours_span() -> f64 {
    2.0
}

const fn default_sweep_points() -> usize {
    20
}

const fn default_trucks_min() -> f64 {
    5.0
}

const fn default_trucks_max() -> f64 {
    30.0
}

const fn default_bundle_cost() -> f64 {
    10.0
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            production_hours_per_day: default_hours_per_day(),
            production_days_per_week: default_days_per_week(),
            product_mix_ratio: default_mix_ratio(),
            hours_span: default_hours_span(),
            sweep_points: default_sweep_points(),
            trucks_min: default_trucks_min(),
            trucks_max: default_trucks_max(),
            avg_bundle_cost: default_bundle_cost(),
        }
    }
}

impl AnalysisParams {
    /// Load parameters from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML does not parse,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> FlowResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse parameters from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> FlowResult<Self> {
        let params: Self = serde_yaml::from_str(yaml)?;
        params.validate()?;
        params.validate_semantic()?;
        Ok(params)
    }

    /// Create a builder for parameters.
    #[must_use]
    pub fn builder() -> AnalysisParamsBuilder {
        AnalysisParamsBuilder::default()
    }

    /// Validate semantic constraints beyond the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the production schedule is not positive or the
    /// truck sweep bounds are inverted.
    pub fn validate_semantic(&self) -> FlowResult<()> {
        if self.production_hours_per_day <= 0.0 {
            return Err(FlowError::config("Production hours/day must be positive"));
        }
        if self.production_days_per_week <= 0.0 {
            return Err(FlowError::config("Production days/week must be positive"));
        }
        if self.trucks_min > self.trucks_max {
            return Err(FlowError::config(format!(
                "Truck sweep bounds inverted: {} > {}",
                self.trucks_min, self.trucks_max
            )));
        }
        Ok(())
    }

    /// Clamp parameters to the ranges the computation assumes.
    ///
    /// Mirrors the interactive input boundary: hours floored at
    /// [`MIN_PRODUCTION_HOURS`], mix ratio held to [0, 1], span and bundle
    /// cost floored at zero, at least one sweep point, and an inverted truck
    /// range resolved by pulling the lower bound down to the upper.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut p = self.clone();
        p.production_hours_per_day = p.production_hours_per_day.max(MIN_PRODUCTION_HOURS);
        p.product_mix_ratio = p.product_mix_ratio.clamp(0.0, 1.0);
        p.hours_span = p.hours_span.max(0.0);
        p.sweep_points = p.sweep_points.max(1);
        p.avg_bundle_cost = p.avg_bundle_cost.max(0.0);
        p.trucks_max = p.trucks_max.max(0.0);
        p.trucks_min = p.trucks_min.max(0.0).min(p.trucks_max);
        p
    }

    /// The five production-hours scenarios: the base value and offsets at
    /// plus/minus one and two spans, ascending, each floored at
    /// [`MIN_PRODUCTION_HOURS`].
    ///
    /// A span of zero yields five identical scenarios; this degenerate fan
    /// is preserved rather than deduplicated.
    #[must_use]
    pub fn hours_variations(&self) -> [f64; 5] {
        let base = self.production_hours_per_day;
        let span = self.hours_span;
        [
            base - 2.0 * span,
            base - span,
            base,
            base + span,
            base + 2.0 * span,
        ]
        .map(|h| h.max(MIN_PRODUCTION_HOURS))
    }

    /// Per-product shares of production: the mix ratio to the first product,
    /// the remainder to the second.
    #[must_use]
    pub fn mix_shares(&self) -> [f64; 2] {
        [self.product_mix_ratio, 1.0 - self.product_mix_ratio]
    }
}

/// Parameter builder for programmatic construction.
#[derive(Debug, Default)]
pub struct AnalysisParamsBuilder {
    production_hours_per_day: Option<f64>,
    production_days_per_week: Option<f64>,
    product_mix_ratio: Option<f64>,
    hours_span: Option<f64>,
    sweep_points: Option<usize>,
    trucks_min: Option<f64>,
    trucks_max: Option<f64>,
    avg_bundle_cost: Option<f64>,
}

impl AnalysisParamsBuilder {
    /// Set the base production hours per day.
    #[must_use]
    pub const fn production_hours_per_day(mut self, hours: f64) -> Self {
        self.production_hours_per_day = Some(hours);
        self
    }

    /// Set the production days per week.
    #[must_use]
    pub const fn production_days_per_week(mut self, days: f64) -> Self {
        self.production_days_per_week = Some(days);
        self
    }

    /// Set the product mix ratio.
    #[must_use]
    pub const fn product_mix_ratio(mut self, ratio: f64) -> Self {
        self.product_mix_ratio = Some(ratio);
        self
    }

    /// Set the hours-variation span.
    #[must_use]
    pub const fn hours_span(mut self, span: f64) -> Self {
        self.hours_span = Some(span);
        self
    }

    /// Set the number of truck-sweep samples.
    #[must_use]
    pub const fn sweep_points(mut self, count: usize) -> Self {
        self.sweep_points = Some(count);
        self
    }

    /// Set the truck-rate sweep bounds.
    #[must_use]
    pub const fn truck_range(mut self, min: f64, max: f64) -> Self {
        self.trucks_min = Some(min);
        self.trucks_max = Some(max);
        self
    }

    /// Set the average bundle cost.
    #[must_use]
    pub const fn avg_bundle_cost(mut self, cost: f64) -> Self {
        self.avg_bundle_cost = Some(cost);
        self
    }

    /// Build the parameters, filling unset fields from [`Default`].
    #[must_use]
    pub fn build(self) -> AnalysisParams {
        let mut params = AnalysisParams::default();

        if let Some(hours) = self.production_hours_per_day {
            params.production_hours_per_day = hours;
        }
        if let Some(days) = self.production_days_per_week {
            params.production_days_per_week = days;
        }
        if let Some(ratio) = self.product_mix_ratio {
            params.product_mix_ratio = ratio;
        }
        if let Some(span) = self.hours_span {
            params.hours_span = span;
        }
        if let Some(count) = self.sweep_points {
            params.sweep_points = count;
        }
        if let Some(min) = self.trucks_min {
            params.trucks_min = min;
        }
        if let Some(max) = self.trucks_max {
            params.trucks_max = max;
        }
        if let Some(cost) = self.avg_bundle_cost {
            params.avg_bundle_cost = cost;
        }

        params
    }
}
