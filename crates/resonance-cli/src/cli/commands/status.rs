//! `resonance status` - Architecture status snapshot.

use anyhow::Result;
use colored::Colorize;
use resonance_core::ArchitectureStatus;

use super::Context;
use crate::cli::args::StatusArgs;
use crate::explain::Explain;
use crate::output;

/// Build the network, run one round and snapshot it.
pub fn collect(ctx: &Context, args: &StatusArgs) -> Result<ArchitectureStatus> {
    let mut network = ctx.network(args.at)?;
    if !args.no_bridge {
        network.activate_bridge();
    }
    network.synchronize()?;
    Ok(network.status()?)
}

pub fn execute(ctx: Context, args: StatusArgs) -> Result<()> {
    if ctx.explain {
        Explain::status().print();
    }

    let status = collect(&ctx, &args)?;

    if let Some(text) = output::render(ctx.output_format, &status)? {
        println!("{text}");
        return Ok(());
    }

    println!("{} {}", "Version:".bold(), status.version);
    println!("{} {:.3} s", "Uptime:".bold(), status.uptime_secs);
    println!();

    let c = &status.constant;
    println!("{}", "Constant".bold().underline());
    println!("  {:<12} {}", "symbol", c.symbol);
    println!("  {:<12} {} {}", "value", c.value_hz, c.unit);
    println!("  {:<12} {:.3} m", "wavelength", c.wavelength_m);
    println!("  {:<12} {:.6} s", "period", c.period_s);
    println!();

    let n = &status.network;
    println!("{}", "Network".bold().underline());
    println!("  {:<12} {}", "nodes", n.total_nodes);
    println!("  {:<12} {}", "active", n.active_nodes);
    println!("  {:<12} {} Hz", "frequency", n.sync_frequency);
    println!("  {:<12} {} Hz", "master clock", n.master_clock);
    println!();

    println!("{}", "Bridge".bold().underline());
    println!("  {:<12} {}", "active", status.bridge.active);
    println!("  {:<12} {}", "location", status.bridge.location);
    println!();

    let w = &status.watchdog;
    println!("{}", "Watchdog".bold().underline());
    println!("  {:<12} {}", "all synced", w.all_synchronized);
    println!("  {:<12} {}", "bridge", w.bridge_reachable);
    let health = if w.system_health.is_optimal() {
        w.system_health.as_str().green().bold()
    } else {
        w.system_health.as_str().red().bold()
    };
    println!("  {:<12} {}", "health", health);

    Ok(())
}
