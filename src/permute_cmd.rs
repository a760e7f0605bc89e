//! Permute command: permutation test of the window/baseline difference.

use anyhow::{Context, Result};
use tracing::info_span;

use anniv_resample::permutation_test;
use anniv_series::{annotate, partition};

use crate::cli::PermuteArgs;
use crate::config::AnnivConfig;
use crate::convert;
use crate::input;

/// Significance level for the printed verdict.
const ALPHA: f64 = 0.05;

/// Run the permutation test and print the p-value.
pub fn run(args: PermuteArgs) -> Result<()> {
    let _cmd = info_span!("permute").entered();
    let mut config = AnnivConfig::from_args(&args.common)?;
    if let Some(n) = args.n_permutations {
        config.permutation.n_permutations = n;
    }

    let anniversary = convert::parse_anniversary(&config.window)?;
    let window = convert::build_window_config(&config.window)?;
    let perm_cfg = convert::build_permutation_config(&config.permutation)?;
    let observations = input::load_observations(&config)?;

    let series = annotate(&observations, anniversary)?;
    let split = partition(&series, &window)
        .with_context(|| format!("cannot partition around {anniversary}"))?;

    let mut rng = convert::make_rng(config.seed);
    let result = permutation_test(split.in_window(), split.baseline(), &perm_cfg, &mut rng)?;

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
        "permutation p-value: {:.6} ({} permutations)",
        result.p_value(),
        perm_cfg.n_permutations()
    );
    if result.is_significant(ALPHA) {
        println!(
            "the window/baseline difference is statistically significant at alpha = {ALPHA}"
        );
    } else {
        println!(
            "the window/baseline difference is not statistically significant at alpha = {ALPHA}"
        );
    }
    Ok(())
}
