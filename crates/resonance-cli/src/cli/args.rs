//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use resonance_core::NodeDistribution;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Resonance network simulator
///
/// Synchronizes a synthetic network of nodes against a shared reference
/// frequency and reports network health.
/// Use --explain on any command to learn what it computes.
#[derive(Parser, Debug)]
#[command(name = "resonance")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML config file (or set RESONANCE_CONFIG)
    #[arg(short, long, env = "RESONANCE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Override the node distribution, e.g. "europe=3,asia=2"
    #[arg(short, long, global = true)]
    pub distribution: Option<NodeDistribution>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Explain what this command computes
    #[arg(long, global = true)]
    pub explain: bool,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full demonstration: initialize, activate bridge, synchronize, report
    Run(RunArgs),

    /// Run one synchronization round and show the report
    Sync(SyncArgs),

    /// Show the architecture status after a synchronization round
    Status(StatusArgs),

    /// Show the reference constant with wavelength and period
    Constant(ConstantArgs),

    /// Compute the stability ROI score
    Roi(RoiArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

// ============================================================================
// Run command
// ============================================================================

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Leave the resonance bridge inactive
    #[arg(long)]
    pub no_bridge: bool,

    /// Acoustic output duration in seconds (default: one sync cycle)
    #[arg(long)]
    pub duration: Option<f64>,

    /// Use this Unix timestamp instead of the wall clock
    #[arg(long, allow_negative_numbers = true)]
    pub at: Option<f64>,
}

// ============================================================================
// Sync command
// ============================================================================

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Reference frequency in Hz (default: from config)
    #[arg(short, long, allow_negative_numbers = true)]
    pub frequency: Option<f64>,

    /// Use this Unix timestamp instead of the wall clock
    #[arg(long, allow_negative_numbers = true)]
    pub at: Option<f64>,

    /// List every node with its phase
    #[arg(long)]
    pub nodes: bool,
}

// ============================================================================
// Status command
// ============================================================================

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Leave the resonance bridge inactive
    #[arg(long)]
    pub no_bridge: bool,

    /// Use this Unix timestamp instead of the wall clock
    #[arg(long, allow_negative_numbers = true)]
    pub at: Option<f64>,
}

// ============================================================================
// Constant command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConstantArgs {
    /// Frequency in Hz (default: reference frequency from config)
    #[arg(short, long, allow_negative_numbers = true)]
    pub frequency: Option<f64>,

    /// Speed of sound in m/s (default: from config)
    #[arg(short, long)]
    pub speed_of_sound: Option<f64>,
}

// ============================================================================
// ROI command
// ============================================================================

#[derive(Args, Debug)]
pub struct RoiArgs {
    /// Naval distance in nautical miles (target 125)
    #[arg(allow_negative_numbers = true)]
    pub naval_distance: f64,

    /// Gas flow in MMcf/day (target 175)
    #[arg(allow_negative_numbers = true)]
    pub gas_flow: f64,

    /// Humanitarian funding in USD millions (target 606)
    #[arg(allow_negative_numbers = true)]
    pub funding: f64,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Show config file path
    Path,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
