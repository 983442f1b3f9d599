//! `ago` CLI entry point.
//!
//! Command-line tools for relative-time formatting:
//! - `ago diff` - Format the difference between two instants
//! - `ago units` - Show the unit threshold table
//! - `ago locales` - List registered locale keys

mod commands;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_diff, run_locales, run_units, DiffArgs, LocalesArgs, UnitsArgs};

/// Relative-time formatting tools.
#[derive(Debug, Parser)]
#[command(name = "ago")]
#[command(about = "Localized relative-time formatting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format an instant relative to a reference instant
    Diff(DiffArgs),
    /// Show the unit threshold table
    Units(UnitsArgs),
    /// List registered locale keys
    Locales(LocalesArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    let result = match cli.command {
        Commands::Diff(args) => run_diff(args),
        Commands::Units(args) => run_units(args),
        Commands::Locales(args) => run_locales(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
