//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use resonance_core::ResonanceError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration, then apply command-line overrides
    let config_path = config::resolve_path(cli.config.as_deref())?;
    debug!(path = %config_path.display(), exists = config_path.exists(), "resolved config path");
    let mut resonance_config = config::load(&config_path)?;
    if let Some(distribution) = cli.distribution {
        distribution.validate()?;
        debug!(?distribution, "distribution overridden from command line");
        resonance_config.distribution = distribution;
    }

    // Create context for commands
    let ctx = commands::Context {
        config: resonance_config,
        config_path,
        output_format: cli.output.unwrap_or(OutputFormat::Pretty),
        explain: cli.explain,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Run(args) => commands::run::execute(ctx, args),
        Commands::Sync(args) => commands::sync::execute(ctx, args),
        Commands::Status(args) => commands::status::execute(ctx, args),
        Commands::Constant(args) => commands::constant::execute(ctx, args),
        Commands::Roi(args) => commands::roi::execute(ctx, args),
        Commands::Config(args) => commands::config::execute(ctx, args),
    }
}

/// Exit status for a failed run.
///
/// Bad input (frequency, distribution, timestamp, ROI values) exits with 2,
/// the same status clap uses for usage errors. Everything else exits with 1.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    let input_error = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<ResonanceError>())
        .any(ResonanceError::is_input_error);

    if input_error {
        2
    } else {
        1
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `info` with `--verbose` and `warn` without.
fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
