//! Shared loading steps for every subcommand.

use anyhow::{Context, Result, anyhow};
use tracing::info;

use anniv_io::read_observations;
use anniv_series::Observation;

use crate::config::AnnivConfig;
use crate::convert;

/// Reads the configured input file into observations.
pub fn load_observations(config: &AnnivConfig) -> Result<Vec<Observation>> {
    let input =
        config.io.input.as_ref().ok_or_else(|| {
            anyhow!("no input path: set [io].input in config or use --input")
        })?;
    let reader_cfg = convert::build_reader_config(&config.io);
    let observations = read_observations(input, &reader_cfg)
        .with_context(|| format!("failed to read Parquet: {}", input.display()))?;
    info!(
        n = observations.len(),
        article = ?reader_cfg.article(),
        "observations loaded"
    );
    Ok(observations)
}

/// Writes `contents` to `path`, or to stdout when `path` is `None`.
pub fn write_or_print(path: Option<&std::path::Path>, contents: &str) -> Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, contents)
                .with_context(|| format!("failed to write {}", p.display()))?;
            info!(path = %p.display(), "output written");
        }
        None => print!("{contents}"),
    }
    Ok(())
}
