//! Analyze command: every procedure, one JSON report.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use anniv_analysis::{AnalysisReport, analyze, to_json};

use crate::cli::AnalyzeArgs;
use crate::config::AnnivConfig;
use crate::convert;
use crate::input;

/// Run the full analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();
    let mut config = AnnivConfig::from_args(&args.common)?;
    if args.include_distributions {
        config.report.include_distributions = true;
    }
    let output = args.output.or_else(|| config.report.output.clone());

    let analysis_cfg = convert::build_analysis_config(&config)?;
    let observations = input::load_observations(&config)?;

    let mut rng = convert::make_rng(config.seed);
    let analysis = analyze(&observations, &analysis_cfg, &mut rng).context("analysis failed")?;
    info!(
        in_window = analysis.partition().in_window().len(),
        baseline = analysis.partition().baseline().len(),
        p_value = analysis.permutation().p_value(),
        "analysis finished"
    );

    let report = AnalysisReport::new(&analysis, &analysis_cfg, config.seed);
    let mut json = to_json(&report)?;
    json.push('\n');
    input::write_or_print(output.as_deref(), &json)
}
