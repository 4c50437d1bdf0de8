//! `resonance config` - Configuration file management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Path => show_path(&ctx),
        ConfigCommands::Init { force } => init_config(&ctx, force),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&ctx.config)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&ctx.config)?);
        }
        OutputFormat::Pretty => {
            let source = if ctx.config_path.exists() {
                ctx.config_path.display().to_string()
            } else {
                "(defaults)".dimmed().to_string()
            };
            println!("{} {}", "Source:".bold(), source);
            println!();
            print!("{}", ctx.config.to_toml()?);
        }
    }

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    println!("{}", ctx.config_path.display());
    Ok(())
}

fn init_config(ctx: &Context, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {}\n\
             Use --force to overwrite it.",
            path.display()
        );
    }

    config::save(&ctx.config, path)?;
    println!("{} wrote {}", "Success:".green().bold(), path.display());

    Ok(())
}
