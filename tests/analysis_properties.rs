//! End-to-end properties of the warehouse what-if computation, exercised
//! through the public API only.

use palletflow::prelude::*;

fn reference_params() -> AnalysisParams {
    AnalysisParams::builder()
        .production_hours_per_day(16.0)
        .production_days_per_week(5.0)
        .product_mix_ratio(0.6)
        .hours_span(2.0)
        .truck_range(10.0, 30.0)
        .sweep_points(21)
        .avg_bundle_cost(10.0)
        .build()
}

// H0: the sweep holds its documented endpoints and spacing
#[test]
fn sweep_endpoints_and_spacing() {
    for (a, b) in [(5.0, 30.0), (0.0, 1.0), (-3.0, 3.0)] {
        assert_eq!(sweep(a, b, 1), vec![a]);

        let values = sweep(a, b, 13);
        assert_eq!(values.len(), 13);
        assert!((values[0] - a).abs() < 0.01);
        assert!((values[12] - b).abs() < 0.01);

        let step = (b - a) / 12.0;
        for pair in values.windows(2) {
            assert!((pair[1] - pair[0] - step).abs() < 0.011, "values = {values:?}");
        }
    }
}

// H0: interpolation reproduces its sample points exactly
#[test]
fn interpolation_exact_at_samples() {
    let xs = [3.5, 9.25];
    let ys = [-2.0, 14.0];

    assert!((interpolate(&xs, &ys, xs[0]) - ys[0]).abs() < 1e-12);
    assert!((interpolate(&xs, &ys, xs[1]) - ys[1]).abs() < 1e-12);
}

// H0: production depends only on the hours value within a scenario
#[test]
fn production_constant_across_truck_sweep() {
    let report = AnalysisReport::compute(&reference_params(), &PlantConfig::default());

    for group in &report.scenarios {
        for point in &group.points {
            assert!((point.total_production_pallets - group.total_production_pallets).abs() < 1e-12);
        }
    }
}

// H0: turnover depends only on the truck rate, never on production hours
#[test]
fn turnover_independent_of_hours() {
    let report = AnalysisReport::compute(&reference_params(), &PlantConfig::default());

    let reference = &report.scenarios[0];
    for group in &report.scenarios[1..] {
        for (a, b) in reference.points.iter().zip(&group.points) {
            assert!((a.turnover_weeks - b.turnover_weeks).abs() < 1e-12);
        }
    }
}

// H0: a ratio range that misses 1.0 yields no balance point
#[test]
fn balance_not_found_outside_bracket() {
    let plant = PlantConfig::default();

    let low = AnalysisParams::builder().truck_range(1.0, 2.0).sweep_points(5).build();
    let report = AnalysisReport::compute(&low, &plant);
    assert!(report.balance.iter().all(|e| e.balance.is_none()));

    let high = AnalysisParams::builder()
        .truck_range(200.0, 400.0)
        .sweep_points(5)
        .build();
    let report = AnalysisReport::compute(&high, &plant);
    assert!(report.balance.iter().all(|e| e.balance.is_none()));
}

// End-to-end reference computation from the worked example
#[test]
fn reference_scenario_end_to_end() {
    let report = AnalysisReport::compute(&reference_params(), &PlantConfig::default());

    let base = &report.scenarios[2];
    assert!((base.production_hours_per_day - 16.0).abs() < f64::EPSILON);
    assert!((base.total_production_pallets - 432.0).abs() < 0.5);

    let balanced = report.balance[2].balance.unwrap();
    assert!(
        balanced.trucks_per_week > 16.0 && balanced.trucks_per_week < 17.0,
        "balanced trucks = {}",
        balanced.trucks_per_week
    );

    assert!((report.pallet_cost - 240.0).abs() < 1e-9);
    assert!((report.revenue[0].weekly_pallet_target - 520.83).abs() < 0.01);
    assert!((report.revenue[0].weekly_truck_target - 20.03).abs() < 0.01);
}

// Alternate plant constants flow through the whole report
#[test]
fn alternate_plant_constants() {
    let plant = PlantConfig {
        warehouse_pallets: 1400.0,
        pallets_per_truck: 13.0,
        ..Default::default()
    };

    let report = AnalysisReport::compute(&reference_params(), &plant);

    // Half-size trucks double the balanced truck rate past the sweep's top,
    // so the base scenario loses its balance point
    let in_range: Vec<bool> = report
        .balance
        .iter()
        .map(|e| e.balance.is_some())
        .collect();
    assert!(in_range.contains(&false), "in_range = {in_range:?}");

    // Double-size warehouse doubles turnover at a fixed truck rate
    let point = &report.scenarios[0].points[0];
    assert!((point.turnover_weeks - 1400.0 / (10.0 * 13.0)).abs() < 1e-9);
}

// The recompute is a pure function: identical inputs, identical reports
#[test]
fn recompute_is_deterministic() {
    let params = reference_params();
    let plant = PlantConfig::default();

    let a = serde_json::to_string(&AnalysisReport::compute(&params, &plant)).unwrap();
    let b = serde_json::to_string(&AnalysisReport::compute(&params, &plant)).unwrap();
    assert_eq!(a, b);
}

// Reports survive a serde round trip intact
#[test]
fn report_round_trips_through_json() {
    let report = AnalysisReport::compute(&reference_params(), &PlantConfig::default());

    let json = serde_json::to_string_pretty(&report).unwrap();
    let restored: AnalysisReport = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.scenarios.len(), report.scenarios.len());
    assert_eq!(restored.balance.len(), report.balance.len());
    assert_eq!(restored.revenue.len(), report.revenue.len());

    let original = report.balance[2].balance.unwrap();
    let round_tripped = restored.balance[2].balance.unwrap();
    assert!((original.trucks_per_week - round_tripped.trucks_per_week).abs() < 1e-12);
}

// YAML-configured runs match builder-configured runs
#[test]
fn yaml_params_match_builder_params() {
    let yaml = r"
production_hours_per_day: 16.0
production_days_per_week: 5.0
product_mix_ratio: 0.6
hours_span: 2.0
sweep_points: 21
trucks_min: 10.0
trucks_max: 30.0
avg_bundle_cost: 10.0
";
    let from_yaml = AnalysisParams::from_yaml(yaml).unwrap();
    assert_eq!(from_yaml, reference_params());
}
