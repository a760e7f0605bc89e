//! Seasonal command: month-day by year pivot table.

use anyhow::Result;
use tracing::info_span;

use anniv_analysis::seasonal_table;

use crate::cli::SeasonalArgs;
use crate::config::AnnivConfig;
use crate::input;

/// Build the seasonal table and write it as CSV.
pub fn run(args: SeasonalArgs) -> Result<()> {
    let _cmd = info_span!("seasonal").entered();
    let config = AnnivConfig::from_args(&args.common)?;
    let observations = input::load_observations(&config)?;
    let table = seasonal_table(&observations);
    input::write_or_print(args.output.as_deref(), &table.to_csv())
}
