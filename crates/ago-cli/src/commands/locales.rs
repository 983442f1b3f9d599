//! Implementation of the `ago locales` command.

use std::path::PathBuf;

use owo_colors::OwoColorize;

/// Arguments for the locales command.
#[derive(Debug, clap::Args)]
pub struct LocalesArgs {
    /// JSON file of extra locale packs (key -> partial pack)
    #[arg(long)]
    pub packs: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the locales command.
pub fn run_locales(args: LocalesArgs) -> miette::Result<i32> {
    let registry = super::build_registry(args.packs.as_deref())?;

    let mut keys: Vec<String> = registry.keys().map(str::to_string).collect();
    keys.sort_unstable();

    if args.json {
        let json = serde_json::to_string_pretty(&keys)
            .map_err(|e| miette::miette!("Failed to serialize locales: {}", e))?;
        println!("{json}");
        return Ok(exitcode::OK);
    }

    for key in &keys {
        let sample = &registry.get(key).just_now;
        println!("{}  {}", key.bold(), sample.dimmed());
    }

    Ok(exitcode::OK)
}
