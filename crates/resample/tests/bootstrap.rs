use anniv_resample::{BootstrapConfig, bootstrap};
use approx::assert_relative_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

fn jan1_scenario() -> (Vec<f64>, Vec<f64>) {
    // Three years of daily data: 100 on each Jan 1, 10 on every other day.
    (vec![100.0; 3], vec![10.0; 365 + 365 + 366 - 3])
}

#[test]
fn jan1_spike_interval_excludes_zero() {
    let (window, baseline) = jan1_scenario();
    let mut rng = StdRng::seed_from_u64(42);
    let r = bootstrap(&window, &baseline, &BootstrapConfig::new(), &mut rng).unwrap();
    assert_relative_eq!(r.observed(), 90.0);
    assert!(r.excludes_zero());
    assert_relative_eq!(r.lower(), 90.0);
    assert_relative_eq!(r.upper(), 90.0);
    assert_eq!(r.distribution().len(), 10_000);
}

#[test]
fn same_seed_same_result() {
    let a = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
    let b = [5.0, 3.0, 5.0, 8.0, 9.0, 7.0, 9.0, 3.0, 2.0, 3.0];
    let config = BootstrapConfig::new().with_n_resamples(3_000);
    let r1 = bootstrap(&a, &b, &config, &mut StdRng::seed_from_u64(7)).unwrap();
    let r2 = bootstrap(&a, &b, &config, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(r1, r2);

    let r3 = bootstrap(&a, &b, &config, &mut StdRng::seed_from_u64(8)).unwrap();
    assert_ne!(r1.distribution(), r3.distribution());
}

#[test]
fn interval_brackets_are_ordered_and_within_distribution() {
    let a = [12.0, 15.0, 11.0, 19.0, 14.0];
    let b = [10.0, 9.0, 13.0, 8.0, 12.0, 11.0];
    let config = BootstrapConfig::new().with_n_resamples(2_000);
    let r = bootstrap(&a, &b, &config, &mut StdRng::seed_from_u64(11)).unwrap();
    let min = r.distribution().iter().copied().fold(f64::INFINITY, f64::min);
    let max = r.distribution().iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(min <= r.lower() && r.lower() <= r.upper() && r.upper() <= max);
}

#[test]
fn null_interval_covers_zero_in_most_runs() {
    let normal = Normal::new(50.0, 5.0).unwrap();
    let config = BootstrapConfig::new().with_n_resamples(1_000);
    let runs = 200;
    let mut covered = 0;
    for seed in 0..runs {
        let mut data_rng = StdRng::seed_from_u64(1_000 + seed);
        let a: Vec<f64> = (0..100).map(|_| normal.sample(&mut data_rng)).collect();
        let b: Vec<f64> = (0..150).map(|_| normal.sample(&mut data_rng)).collect();
        let r = bootstrap(&a, &b, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
        if !r.excludes_zero() {
            covered += 1;
        }
    }
    assert!(covered * 10 >= runs * 9, "95% interval covered zero in {covered}/{runs} runs");
}

#[test]
fn wider_confidence_gives_wider_interval() {
    let a = [1.0, 4.0, 2.0, 8.0, 5.0, 7.0];
    let b = [3.0, 2.0, 6.0, 1.0, 2.0];
    let narrow = BootstrapConfig::new()
        .with_n_resamples(4_000)
        .with_confidence_level(0.5);
    let wide = narrow.with_confidence_level(0.99);
    let rn = bootstrap(&a, &b, &narrow, &mut StdRng::seed_from_u64(3)).unwrap();
    let rw = bootstrap(&a, &b, &wide, &mut StdRng::seed_from_u64(3)).unwrap();
    // Same stream, same draws: only the percentiles differ.
    assert_eq!(rn.distribution(), rw.distribution());
    assert!(rw.lower() <= rn.lower());
    assert!(rw.upper() >= rn.upper());
}
