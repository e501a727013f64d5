//! # palletflow
//!
//! Warehouse throughput what-if calculator.
//!
//! Given a production schedule, a product mix, and a sweep of outbound truck
//! rates, palletflow computes the ratio of production capacity to outbound
//! capacity and the warehouse turnover time for a fan of production-hour
//! scenarios, locates the truck rate at which production and outbound move
//! the same weekly pallet volume, and translates fixed monthly revenue
//! targets into weekly pallet and truck equivalents.
//!
//! Every recompute is a pure function of the input parameters and the plant
//! constants: nothing is cached, nothing is mutated in place, and the same
//! inputs always produce the same report.
//!
//! ## Example
//!
//! ```rust
//! use palletflow::prelude::*;
//!
//! let params = AnalysisParams::builder()
//!     .production_hours_per_day(16.0)
//!     .production_days_per_week(5.0)
//!     .build();
//! let report = AnalysisReport::compute(&params, &PlantConfig::default());
//! assert_eq!(report.scenarios.len(), 5);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::suboptimal_flops,     // Arithmetic stays in its documented form
    clippy::missing_const_for_fn, // Many functions can't be const in stable Rust
)]

pub mod config;
pub mod engine;
pub mod error;
pub mod scenarios;

#[cfg(feature = "wasm")]
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AnalysisParams, AnalysisParamsBuilder, PlantConfig, ProductSpec};
    pub use crate::engine::{interpolate, sweep};
    pub use crate::error::{FlowError, FlowResult};
    pub use crate::scenarios::{
        AnalysisReport, BalanceEntry, BalancePoint, RevenueTarget, ScenarioGroup, ScenarioPoint,
    };
}

/// Re-export for public API
pub use error::{FlowError, FlowResult};
