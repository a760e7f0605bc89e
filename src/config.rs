use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::CommonArgs;

/// Top-level anniv configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AnnivConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Anniversary window settings.
    #[serde(default)]
    pub window: WindowToml,

    /// Bootstrap settings.
    #[serde(default)]
    pub bootstrap: BootstrapToml,

    /// Permutation settings.
    #[serde(default)]
    pub permutation: PermutationToml,

    /// Report settings.
    #[serde(default)]
    pub report: ReportToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_value_column")]
    pub value_column: String,
    #[serde(default = "default_article_column")]
    pub article_column: String,
    #[serde(default)]
    pub article: Option<String>,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            date_column: default_date_column(),
            value_column: default_value_column(),
            article_column: default_article_column(),
            article: None,
        }
    }
}

fn default_date_column() -> String {
    "date".to_string()
}
fn default_value_column() -> String {
    "views".to_string()
}
fn default_article_column() -> String {
    "article".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowToml {
    #[serde(default)]
    pub anniversary: Option<String>,
    #[serde(default)]
    pub radius: u32,
    #[serde(default = "default_mode")]
    pub mode: String,
}

impl Default for WindowToml {
    fn default() -> Self {
        Self {
            anniversary: None,
            radius: 0,
            mode: default_mode(),
        }
    }
}

fn default_mode() -> String {
    "calendar".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapToml {
    #[serde(default = "default_n_iterations")]
    pub n_resamples: usize,
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
}

impl Default for BootstrapToml {
    fn default() -> Self {
        Self {
            n_resamples: default_n_iterations(),
            confidence_level: default_confidence_level(),
        }
    }
}

fn default_n_iterations() -> usize {
    10_000
}
fn default_confidence_level() -> f64 {
    0.95
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PermutationToml {
    #[serde(default = "default_n_iterations")]
    pub n_permutations: usize,
}

impl Default for PermutationToml {
    fn default() -> Self {
        Self {
            n_permutations: default_n_iterations(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ReportToml {
    #[serde(default)]
    pub include_distributions: bool,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl AnnivConfig {
    /// Loads `path` if given, otherwise starts from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Loads the config named by `common` and applies its flag overrides.
    pub fn from_args(common: &CommonArgs) -> Result<Self> {
        let mut config = Self::load(common.config.as_deref())?;
        config.apply_overrides(common);
        Ok(config)
    }

    /// Replaces config values with any flags that were given.
    pub fn apply_overrides(&mut self, common: &CommonArgs) {
        if let Some(ref input) = common.input {
            self.io.input = Some(input.clone());
        }
        if let Some(ref article) = common.article {
            self.io.article = Some(article.clone());
        }
        if let Some(ref anniversary) = common.anniversary {
            self.window.anniversary = Some(anniversary.clone());
        }
        if let Some(radius) = common.radius {
            self.window.radius = radius;
        }
        if let Some(ref mode) = common.mode {
            self.window.mode = mode.clone();
        }
        if let Some(seed) = common.seed {
            self.seed = Some(seed);
        }
    }
}
