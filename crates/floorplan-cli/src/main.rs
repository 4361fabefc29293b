//! floorplan CLI entry point.

use std::process;

use clap::Parser;
use log::error;

use floorplan_cli::{Args, error_adapter::to_reportables};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    // Accepts a plain level or env_logger directives such as `floorplan=debug`
    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    let Err(err) = floorplan_cli::run(&args) else {
        return;
    };

    let reporter = miette::GraphicalReportHandler::new();
    for reportable in to_reportables(&err) {
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &reportable)
            .expect("Writing to String buffer is infallible");
        error!("{writer}");
    }
    process::exit(1);
}
