//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Typed configuration for a multi-locale static blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: blog.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "blog.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Continue without asking when the config has unknown fields
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter blog.toml and content directories
    #[command(visible_alias = "i")]
    Init {
        /// Blog directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the starter config instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Validate the configuration
    #[command(visible_alias = "c")]
    Check {
        /// Also report sidebar sections whose content directory is missing
        #[arg(long)]
        content: bool,
    },

    /// Assemble the framework configuration object
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print navbar and sidebar of each locale as a tree
    #[command(visible_alias = "t")]
    Tree {
        /// Only show this locale prefix (e.g. "/zh/")
        #[arg(short, long)]
        locale: Option<String>,

        /// Expand `children = "structure"` from the content directory
        #[arg(short, long)]
        resolve: bool,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Write the configuration to this file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Expand `children = "structure"` from the content directory
    #[arg(short, long)]
    pub resolve: bool,

    /// Override theme.hostname.
    ///
    /// Useful when the deployed URL differs per environment. The path
    /// component becomes the site base unless `base` is set explicitly.
    #[arg(short = 'U', long, value_hint = clap::ValueHint::Url)]
    pub hostname: Option<String>,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}
