//! palletflow CLI - warehouse throughput what-if calculator.
//!
//! Runs one recompute from YAML parameters (or defaults) and prints the
//! balance and revenue summary tables.

use std::process::ExitCode;

use palletflow::prelude::*;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let params = match args.next() {
        Some(path) => match AnalysisParams::load(&path) {
            Ok(params) => params,
            Err(err) => {
                eprintln!("palletflow: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => AnalysisParams::default(),
    };

    let plant = match args.next() {
        Some(path) => match PlantConfig::load(&path) {
            Ok(plant) => plant,
            Err(err) => {
                eprintln!("palletflow: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => PlantConfig::default(),
    };

    let report = AnalysisReport::compute(&params, &plant);
    print_report(&report);

    ExitCode::SUCCESS
}

fn print_report(report: &AnalysisReport) {
    println!("palletflow v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "base: {} h/day x {} d/wk, mix {:.2}, trucks {:.1}-{:.1} ({} points)",
        report.params.production_hours_per_day,
        report.params.production_days_per_week,
        report.params.product_mix_ratio,
        report.params.trucks_min,
        report.params.trucks_max,
        report.params.sweep_points,
    );
    println!();

    println!("Balanced production (capacity ratio = 1)");
    println!("  hours/day   production     trucks/wk   pallets/wk");
    for entry in &report.balance {
        match entry.balance {
            Some(point) => println!(
                "  {:>9.1}   {:>10.1}   {:>11.2}   {:>10.2}",
                entry.production_hours_per_day,
                entry.total_production_pallets,
                point.trucks_per_week,
                point.pallets_per_week,
            ),
            None => println!(
                "  {:>9.1}   {:>10.1}   {:>11}   {:>10}",
                entry.production_hours_per_day, entry.total_production_pallets, "N/A", "N/A",
            ),
        }
    }
    println!();

    println!("Revenue targets (pallet cost ${:.2})", report.pallet_cost);
    for target in &report.revenue {
        println!(
            "  ${:>9.0}/mo = {:>7.1} pallets/wk = {:>6.2} trucks/wk",
            target.monthly_revenue, target.weekly_pallet_target, target.weekly_truck_target,
        );
        for row in &target.scenarios {
            println!(
                "    {:>5.1} h/day: {:>7.1} pallets/wk, {:.2}x target, {:+.1} pallets",
                row.production_hours_per_day,
                row.total_production_pallets,
                row.ratio_to_target,
                row.surplus_pallets,
            );
        }
    }
}
