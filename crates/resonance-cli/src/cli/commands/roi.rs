//! `resonance roi` - Stability ROI score.

use anyhow::Result;
use colored::Colorize;
use resonance_core::stability_roi;
use serde::Serialize;

use super::Context;
use crate::cli::args::RoiArgs;
use crate::explain::Explain;
use crate::output;

#[derive(Debug, Serialize)]
pub struct RoiOutput {
    pub naval_distance: f64,
    pub gas_flow: f64,
    pub funding: f64,
    pub stability_roi: f64,
}

pub fn execute(ctx: Context, args: RoiArgs) -> Result<()> {
    if ctx.explain {
        Explain::roi().print();
    }

    let out = RoiOutput {
        stability_roi: stability_roi(args.naval_distance, args.gas_flow, args.funding)?,
        naval_distance: args.naval_distance,
        gas_flow: args.gas_flow,
        funding: args.funding,
    };

    if let Some(text) = output::render(ctx.output_format, &out)? {
        println!("{text}");
        return Ok(());
    }

    println!("{} {}", "Stability ROI:".bold(), out.stability_roi.to_string().cyan().bold());
    println!(
        "  {}",
        format!(
            "distance {} nm, gas flow {} MMcf/day, funding {} M USD",
            out.naval_distance, out.gas_flow, out.funding
        )
        .dimmed()
    );

    Ok(())
}
