//! Correlate command: distance correlations and regression summary.

use anyhow::{Context, Result};
use tracing::info_span;

use anniv_analysis::distance_regression;
use anniv_series::annotate;

use crate::cli::CorrelateArgs;
use crate::config::AnnivConfig;
use crate::convert;
use crate::input;

/// Fit the distance regression and print its summary table.
pub fn run(args: CorrelateArgs) -> Result<()> {
    let _cmd = info_span!("correlate").entered();
    let config = AnnivConfig::from_args(&args.common)?;

    let anniversary = convert::parse_anniversary(&config.window)?;
    let observations = input::load_observations(&config)?;

    let series = annotate(&observations, anniversary)?;
    let result = distance_regression(&series).context("distance regression failed")?;

    let table = result.summary_table();
    print!("{table}");
    if let Some(ref path) = args.outfile {
        input::write_or_print(Some(path), &table)?;
    }
    Ok(())
}
