//! `resonance constant` - Wavelength and period of the reference frequency.

use anyhow::Result;
use colored::Colorize;
use resonance_core::ReferenceConstant;
use serde::Serialize;

use super::Context;
use crate::cli::args::ConstantArgs;
use crate::explain::Explain;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ConstantOutput {
    #[serde(flatten)]
    pub constant: ReferenceConstant,
    pub speed_of_sound: f64,
    pub wavelength_m: f64,
    pub period_s: f64,
}

pub fn collect(ctx: &Context, args: &ConstantArgs) -> Result<ConstantOutput> {
    let constant =
        ReferenceConstant::at(args.frequency.unwrap_or(ctx.config.reference_frequency));
    let speed_of_sound = args.speed_of_sound.unwrap_or(ctx.config.speed_of_sound);

    Ok(ConstantOutput {
        wavelength_m: constant.wavelength(speed_of_sound)?,
        period_s: constant.period()?,
        speed_of_sound,
        constant,
    })
}

pub fn execute(ctx: Context, args: ConstantArgs) -> Result<()> {
    if ctx.explain {
        Explain::constant().print();
    }

    let out = collect(&ctx, &args)?;

    if let Some(text) = output::render(ctx.output_format, &out)? {
        println!("{text}");
        return Ok(());
    }

    println!(
        "{} = {} {}",
        out.constant.symbol.bold(),
        out.constant.value_hz.to_string().cyan().bold(),
        out.constant.unit
    );
    println!("  Wavelength = {:.3} m (at {} m/s)", out.wavelength_m, out.speed_of_sound);
    println!("  Period     = {:.6} s", out.period_s);

    Ok(())
}
