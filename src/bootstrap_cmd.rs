//! Bootstrap command: confidence interval for the window/baseline difference.

use anyhow::{Context, Result};
use tracing::info_span;

use anniv_resample::bootstrap;
use anniv_series::{annotate, partition};

use crate::cli::BootstrapArgs;
use crate::config::AnnivConfig;
use crate::convert;
use crate::input;

/// Run the bootstrap and print the interval.
pub fn run(args: BootstrapArgs) -> Result<()> {
    let _cmd = info_span!("bootstrap").entered();
    let mut config = AnnivConfig::from_args(&args.common)?;
    if let Some(n) = args.n_resamples {
        config.bootstrap.n_resamples = n;
    }
    if let Some(c) = args.confidence {
        config.bootstrap.confidence_level = c;
    }

    let anniversary = convert::parse_anniversary(&config.window)?;
    let window = convert::build_window_config(&config.window)?;
    let boot_cfg = convert::build_bootstrap_config(&config.bootstrap)?;
    let observations = input::load_observations(&config)?;

    let series = annotate(&observations, anniversary)?;
    let split = partition(&series, &window)
        .with_context(|| format!("cannot partition around {anniversary}"))?;

    let mut rng = convert::make_rng(config.seed);
    let result = bootstrap(split.in_window(), split.baseline(), &boot_cfg, &mut rng)?;

    println!(
        "anniversary {anniversary} (radius {}, {})",
        window.radius(),
        window.mode()
    );
    println!(
        "in window: {}  baseline: {}",
        split.in_window().len(),
        split.baseline().len()
    );
    println!("observed difference in means: {:.4}", result.observed());
    println!(
        "{:.0}% bootstrap interval: [{:.4}, {:.4}] ({} resamples)",
        result.confidence_level() * 100.0,
        result.lower(),
        result.upper(),
        result.distribution().len()
    );
    if result.excludes_zero() {
        println!("the interval excludes zero");
    } else {
        println!("the interval includes zero");
    }
    Ok(())
}
