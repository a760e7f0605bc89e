//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, anyhow, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::warn;

use anniv_analysis::AnalysisConfig;
use anniv_calendar::{Anniversary, DistanceMode};
use anniv_io::ReaderConfig;
use anniv_resample::{BootstrapConfig, PermutationConfig};
use anniv_series::WindowConfig;

use crate::config::*;

/// Parses a distance mode name into the corresponding enum variant.
pub fn parse_distance_mode(s: &str) -> Result<DistanceMode> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "calendar" => Ok(DistanceMode::Calendar),
        "day-of-year" | "doy" => Ok(DistanceMode::DayOfYear),
        other => bail!("unknown distance mode: {other:?} (expected calendar or day-of-year)"),
    }
}

/// Returns the configured anniversary, failing if none was given.
pub fn parse_anniversary(window: &WindowToml) -> Result<Anniversary> {
    let raw = window.anniversary.as_deref().ok_or_else(|| {
        anyhow!("no anniversary: set [window].anniversary in config or use --anniversary")
    })?;
    raw.parse()
        .with_context(|| format!("invalid anniversary: {raw:?}"))
}

/// Builds a [`ReaderConfig`] from the TOML I/O configuration.
pub fn build_reader_config(io: &IoConfig) -> ReaderConfig {
    ReaderConfig::default()
        .with_date_column(&io.date_column)
        .with_value_column(&io.value_column)
        .with_article_column(&io.article_column)
        .with_article(io.article.as_deref())
}

/// Builds a [`WindowConfig`] from the TOML window section.
pub fn build_window_config(window: &WindowToml) -> Result<WindowConfig> {
    let cfg = WindowConfig::new()
        .with_radius(window.radius)
        .with_mode(parse_distance_mode(&window.mode)?);
    cfg.validate().context("invalid [window] configuration")?;
    Ok(cfg)
}

/// Builds a [`BootstrapConfig`] from the TOML bootstrap section.
pub fn build_bootstrap_config(bootstrap: &BootstrapToml) -> Result<BootstrapConfig> {
    let cfg = BootstrapConfig::new()
        .with_n_resamples(bootstrap.n_resamples)
        .with_confidence_level(bootstrap.confidence_level);
    cfg.validate().context("invalid [bootstrap] configuration")?;
    Ok(cfg)
}

/// Builds a [`PermutationConfig`] from the TOML permutation section.
pub fn build_permutation_config(permutation: &PermutationToml) -> Result<PermutationConfig> {
    let cfg = PermutationConfig::new().with_n_permutations(permutation.n_permutations);
    cfg.validate().context("invalid [permutation] configuration")?;
    Ok(cfg)
}

/// Builds the full [`AnalysisConfig`].
pub fn build_analysis_config(config: &AnnivConfig) -> Result<AnalysisConfig> {
    Ok(AnalysisConfig::new(parse_anniversary(&config.window)?)
        .with_window(build_window_config(&config.window)?)
        .with_bootstrap(build_bootstrap_config(&config.bootstrap)?)
        .with_permutation(build_permutation_config(&config.permutation)?)
        .with_include_distributions(config.report.include_distributions))
}

/// Seeds the run's generator, falling back to OS entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => {
            warn!("no seed configured; results will not be reproducible");
            StdRng::from_os_rng()
        }
    }
}
