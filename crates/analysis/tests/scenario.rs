use anniv_analysis::{AnalysisConfig, AnalysisReport, analyze, seasonal_table, to_json};
use anniv_calendar::Anniversary;
use anniv_resample::{BootstrapConfig, PermutationConfig};
use anniv_series::Observation;
use approx::assert_relative_eq;
use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Three years of daily values: 100 on every Jan 1, 10 on every other day.
fn jan1_spike() -> Vec<Observation> {
    let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|d| {
            let v = if d.ordinal() == 1 { 100.0 } else { 10.0 };
            Observation::new(d, v)
        })
        .collect()
}

fn config() -> AnalysisConfig {
    AnalysisConfig::new(Anniversary::new(1, 1).unwrap())
        .with_bootstrap(BootstrapConfig::new().with_n_resamples(2_000))
        .with_permutation(PermutationConfig::new().with_n_permutations(1_000))
}

#[test]
fn jan1_spike_end_to_end() {
    let obs = jan1_spike();
    let analysis = analyze(&obs, &config(), &mut StdRng::seed_from_u64(42)).unwrap();

    assert_eq!(analysis.partition().in_window(), &[100.0, 100.0, 100.0]);
    assert_eq!(analysis.partition().baseline().len(), obs.len() - 3);
    assert!(analysis.partition().baseline().iter().all(|&v| v == 10.0));

    assert_relative_eq!(analysis.bootstrap().observed(), 90.0);
    assert!(analysis.bootstrap().excludes_zero());
    assert!(analysis.permutation().p_value() < 0.01);

    let r = analysis.regression();
    assert!(r.slope() < 0.0);
    assert!(r.corr_abs.unwrap() < 0.0);
    assert_eq!(r.n_obs, obs.len());
}

#[test]
fn report_round_trips_through_json() {
    let obs = jan1_spike();
    let config = config();
    let analysis = analyze(&obs, &config, &mut StdRng::seed_from_u64(7)).unwrap();
    let report = AnalysisReport::new(&analysis, &config, Some(7));
    let json = to_json(&report).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["config"]["anniversary"], "01-01");
    assert_eq!(value["config"]["distance_mode"], "calendar");
    assert_eq!(value["config"]["seed"], 7);
    assert_eq!(value["partition"]["n_in_window"], 3);
    assert_eq!(value["bootstrap"]["observed"], 90.0);
    assert!(value["bootstrap"].get("distribution").is_none());
    assert!(value["regression"]["coefficients"].is_array());
}

#[test]
fn report_includes_distributions_on_request() {
    let obs = jan1_spike();
    let config = config().with_include_distributions(true);
    let analysis = analyze(&obs, &config, &mut StdRng::seed_from_u64(1)).unwrap();
    let json = to_json(&AnalysisReport::new(&analysis, &config, None)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["bootstrap"]["distribution"].as_array().unwrap().len(), 2_000);
    assert_eq!(
        value["permutation"]["null_distribution"].as_array().unwrap().len(),
        1_000
    );
    assert!(value["config"]["seed"].is_null());
}

#[test]
fn seasonal_table_covers_every_day() {
    let table = seasonal_table(&jan1_spike());
    assert_eq!(table.years(), &[2018, 2019, 2020]);
    assert_eq!(table.keys().count(), 366);
    assert_eq!(table.cell("01-01", 2019), Some(100.0));
    assert_eq!(table.cell("02-29", 2019), None);
    assert_eq!(table.cell("02-29", 2020), Some(10.0));
    let csv = table.to_csv();
    assert!(csv.starts_with("month_day,2018,2019,2020\n01-01,100,100,100\n"));
    assert!(csv.contains("\n02-29,,,10\n"));
}
