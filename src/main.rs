//! blogcfg - Typed configuration for a multi-locale static blog.

#![allow(dead_code)]

mod assemble;
mod cli;
mod config;
mod embed;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_blog(&config, name.is_some(), *dry),
        Commands::Check { content } => cli::check::check_config(&config, *content),
        Commands::Build { build_args } => cli::build::build_config(&config, build_args),
        Commands::Tree { locale, resolve } => {
            cli::tree::print_tree(&config, locale.as_deref(), *resolve)
        }
    }
}
