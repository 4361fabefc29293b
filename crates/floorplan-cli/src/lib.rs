//! CLI logic for the floorplan layout tool.
//!
//! This module contains the core CLI logic: loading configuration, applying
//! command-line overrides, and running a plan file through [`PlanBuilder`].

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::info;

use floorplan::{FloorplanError, PlanBuilder};

/// Run the floorplan CLI application
///
/// This function processes the input plan through the floorplan pipeline
/// and writes the rendered image to the output file. The output format is
/// chosen by the output file extension.
///
/// # Errors
///
/// Returns `FloorplanError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Plan parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), FloorplanError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing plan"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(engine) = args.engine {
        app_config.layout_mut().set_engine(engine);
    }
    if args.seed.is_some() {
        app_config.layout_mut().force_mut().set_seed(args.seed);
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = PlanBuilder::new(app_config);
    let graph = builder.parse(&source)?;
    builder.export(&graph, Path::new(&args.output))?;

    info!(
        output_file = args.output,
        engine = builder.config().layout().engine().to_string();
        "Plan exported successfully"
    );

    Ok(())
}
