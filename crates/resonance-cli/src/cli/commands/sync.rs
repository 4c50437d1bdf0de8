//! `resonance sync` - One synchronization round.

use anyhow::Result;
use colored::Colorize;
use resonance_core::{NetworkReport, Node};
use serde::Serialize;

use super::Context;
use crate::cli::args::SyncArgs;
use crate::explain::Explain;
use crate::output::{self, format_timestamp};

/// Report of the round, plus the nodes when `--nodes` is given.
#[derive(Debug, Serialize)]
pub struct SyncOutput {
    pub report: NetworkReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<Node>>,
}

/// Run the round and collect its output.
pub fn collect(ctx: &Context, args: &SyncArgs) -> Result<SyncOutput> {
    let frequency = args.frequency.unwrap_or(ctx.config.reference_frequency);
    let mut network = ctx.network(args.at)?;
    let report = network.synchronize_with(frequency)?;

    let nodes = args
        .nodes
        .then(|| network.registry().all_nodes().to_vec());

    Ok(SyncOutput { report, nodes })
}

pub fn execute(ctx: Context, args: SyncArgs) -> Result<()> {
    if ctx.explain {
        Explain::sync(args.frequency.unwrap_or(ctx.config.reference_frequency)).print();
    }

    let out = collect(&ctx, &args)?;

    if let Some(text) = output::render(ctx.output_format, &out)? {
        println!("{text}");
        return Ok(());
    }

    let report = &out.report;
    println!(
        "{} {}/{} nodes at {} Hz",
        "Synchronized:".bold(),
        report.synchronized_nodes.to_string().green().bold(),
        report.total_nodes,
        report.frequency.to_string().cyan()
    );
    println!("{} {:.1}%", "Success rate:".bold(), report.success_rate * 100.0);
    println!("{} {}", "Timestamp:".bold(), format_timestamp(report.timestamp).dimmed());

    if let Some(nodes) = &out.nodes {
        println!();
        println!(
            "{:>6}  {:<9} {:>8} {:>9}  {:<13} {:>10}",
            "ID", "REGION", "LAT", "LON", "STATUS", "PHASE"
        );
        for node in nodes {
            let (lat, lon) = node.location().as_tuple();
            println!(
                "{:>6}  {:<9} {:>8.1} {:>9.1}  {:<13} {:>10.6}",
                node.id().to_string(),
                node.region().to_string(),
                lat,
                lon,
                node.status().to_string(),
                node.phase()
            );
        }
    }

    Ok(())
}
