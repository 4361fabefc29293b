//! Command-line argument definitions for the floorplan CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, engine overrides, and logging verbosity.

use clap::Parser;

use floorplan::config::LayoutEngine;

/// Command-line arguments for the floorplan layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input plan file (TOML)
    #[arg(help = "Path to the input plan file")]
    pub input: String,

    /// Path to the output file; the extension selects SVG or PNG
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Layout engine (grid, force); overrides the configuration file
    #[arg(short, long)]
    pub engine: Option<LayoutEngine>,

    /// Seed for the force engine's initial placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter: a level (off, error, warn, info, debug, trace) or env_logger directives
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
