//! # resonance-cli
//!
//! Command-line driver for the resonance network simulator.
//!
//! ## Features
//!
//! - **Demonstration run**: initialize, activate the bridge, synchronize, report
//! - **Reproducible rounds**: `--at <timestamp>` pins the clock
//! - **Explain mode**: `--explain` describes what a command computes
//! - **Multiple output formats**: pretty text, JSON, YAML
//! - **Config file**: TOML in the platform config directory or `--config`

pub mod cli;
pub mod config;
pub mod explain;
pub mod output;

pub use cli::run;
