use tracing_subscriber::EnvFilter;

/// Workspace targets that receive log output by default.
const CRATE_TARGETS: &[&str] = &[
    "anniv",
    "anniv_analysis",
    "anniv_calendar",
    "anniv_io",
    "anniv_resample",
    "anniv_series",
    "anniv_stats",
];

/// Maps the `-v` count to a level name.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds the default filter directives, e.g. `anniv=info,anniv_io=info,...`.
fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing on stderr.
///
/// Reports and tables go to stdout, so log lines never mix with them.
/// `RUST_LOG` replaces the `-v` derived filter when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
