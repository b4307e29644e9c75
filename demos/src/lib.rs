pub mod case_file;
pub mod cli;
pub mod error;
pub mod runner;

/// Default log directives when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,string_proc=warn";

/// Install the log subscriber used by the demo binaries.
/// Logs go to stderr so they never mix with the case report on stdout.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
