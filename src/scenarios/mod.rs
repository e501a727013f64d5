//! Warehouse throughput scenarios.
//!
//! The full what-if computation, assembled from:
//! - [`throughput`]: the production-hours × truck-rate scenario grid
//! - [`balance`]: the truck rate at which production and outbound move the
//!   same weekly pallet volume, per hours-scenario
//! - [`revenue`]: monthly revenue targets translated into weekly pallet and
//!   truck equivalents, compared against each hours-scenario
//! - [`report`]: one pure recompute producing everything the presentation
//!   boundary consumes

pub mod balance;
pub mod report;
pub mod revenue;
pub mod throughput;

pub use balance::{solve_all, solve_balance, BalanceEntry, BalancePoint};
pub use report::AnalysisReport;
pub use revenue::{pallet_cost, RevenueTarget, TargetComparison};
pub use throughput::{build_scenario_groups, ScenarioGroup, ScenarioPoint};
