//! `blogcfg build`: assemble and emit the framework configuration.

use crate::{
    assemble::{AssembleOptions, assemble},
    cli::BuildArgs,
    config::SiteConfig,
    log,
    utils::{path::expand_tilde, plural_count},
};
use anyhow::{Context, Result};
use std::fs;

/// Assemble `config` and write the JSON object to `--output` or stdout.
pub fn build_config(config: &SiteConfig, args: &BuildArgs) -> Result<()> {
    let options = AssembleOptions {
        resolve_structure: args.resolve,
    };
    let assembled = assemble(config, &options)?;
    let json = assembled.to_json(args.pretty)?;

    let Some(output) = &args.output else {
        println!("{json}");
        return Ok(());
    };

    let output = expand_tilde(output);
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&output, format!("{json}\n"))
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    log!(
        "build";
        "wrote {} ({})",
        output.display(),
        plural_count(assembled.locales.len(), "locale")
    );
    Ok(())
}
