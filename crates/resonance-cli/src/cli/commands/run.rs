//! `resonance run` - Full demonstration round.

use anyhow::Result;
use colored::Colorize;
use resonance_core::{AcousticOutput, ArchitectureStatus, NetworkReport};
use serde::Serialize;

use super::Context;
use crate::cli::args::RunArgs;
use crate::explain::Explain;
use crate::output::{self, format_timestamp};

/// Everything a demonstration round produces.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub report: NetworkReport,
    pub acoustic: AcousticOutput,
    pub status: ArchitectureStatus,
}

/// Run the demonstration and collect its results.
pub fn collect(ctx: &Context, args: &RunArgs) -> Result<RunSummary> {
    let mut network = ctx.network(args.at)?;
    if !args.no_bridge {
        network.activate_bridge();
    }

    let report = network.synchronize()?;
    let duration = args.duration.unwrap_or(ctx.config.sync_cycle_secs);
    let acoustic = network.acoustic_output(duration)?;
    let status = network.status()?;

    Ok(RunSummary {
        report,
        acoustic,
        status,
    })
}

pub fn execute(ctx: Context, args: RunArgs) -> Result<()> {
    if ctx.explain {
        Explain::run().print();
    }

    let summary = collect(&ctx, &args)?;

    if let Some(text) = output::render(ctx.output_format, &summary)? {
        println!("{text}");
        return Ok(());
    }

    let RunSummary {
        report,
        acoustic,
        status,
    } = &summary;

    println!("{}", "=".repeat(60));
    println!("{}", "RESONANCE NETWORK".bold());
    println!("{}", "=".repeat(60));
    println!();

    println!("{} {} nodes", "Initialized:".bold(), report.total_nodes.to_string().cyan());
    let bridge = if status.bridge.active {
        "active".green()
    } else {
        "inactive".yellow()
    };
    println!("{} {} ({})", "Bridge:".bold(), bridge, status.bridge.location.dimmed());
    println!();

    println!("{}", "Synchronization:".bold());
    println!("  Frequency: {} Hz", report.frequency);
    println!("  Cycle:     {} s", ctx.config.sync_cycle_secs);
    println!(
        "  Nodes:     {}/{}",
        report.synchronized_nodes.to_string().green(),
        report.total_nodes
    );
    println!("  Success:   {:.1}%", report.success_rate * 100.0);
    println!("  Time:      {}", format_timestamp(report.timestamp).dimmed());
    println!();

    let c = &status.constant;
    println!("{}", "Reference constant:".bold());
    println!("  {} = {} {}", c.symbol, c.value_hz, c.unit);
    println!("  Wavelength = {:.3} m", c.wavelength_m);
    println!("  Period     = {:.6} s", c.period_s);
    println!();

    println!("{}", "Acoustic output:".bold());
    println!("  Frequency: {} Hz", acoustic.frequency);
    println!("  Duration:  {} s", acoustic.duration);
    println!("  Samples:   {} @ {} Hz", acoustic.samples, acoustic.sample_rate);
    println!("  Waveform:  {}", acoustic.waveform);
    println!();

    let health = status.watchdog.system_health;
    let label = health.as_str().to_uppercase();
    let label = if health.is_optimal() {
        label.green().bold()
    } else {
        label.red().bold()
    };
    println!("{} {}", "System health:".bold(), label);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::context;
    use resonance_core::SystemHealth;

    #[test]
    fn test_collect_optimal() {
        let ctx = context("europe=2");
        let args = RunArgs {
            no_bridge: false,
            duration: None,
            at: Some(1_000.0),
        };
        let summary = collect(&ctx, &args).unwrap();
        assert_eq!(summary.report.synchronized_nodes, 2);
        assert_eq!(summary.acoustic.samples, 1_025_325);
        assert_eq!(summary.status.watchdog.system_health, SystemHealth::Optimal);
    }

    #[test]
    fn test_collect_without_bridge() {
        let ctx = context("asia=1");
        let args = RunArgs {
            no_bridge: true,
            duration: Some(1.0),
            at: Some(0.0),
        };
        let summary = collect(&ctx, &args).unwrap();
        assert_eq!(summary.acoustic.samples, 44_100);
        assert_eq!(summary.status.watchdog.system_health, SystemHealth::Degraded);
    }
}
