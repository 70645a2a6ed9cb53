//! pagefarm - batch generator for static guide pages.

mod cli;
mod config;
mod driver;
mod embed;
mod generator;
mod logger;
mod notify;
mod render;
mod store;
mod template;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::FarmConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = FarmConfig::load(&cli)?;

    match &cli.command {
        Commands::Generate { generate_args, .. } => {
            cli::generate::run_generate(&config, generate_args)
        }
        Commands::Rebuild { .. } => cli::rebuild::run_rebuild(&config),
    }
}
