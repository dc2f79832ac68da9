//! `trailgrid` command-line entry point.

use std::process::ExitCode;

use clap::Parser;
use trailgrid_app::{Cli, Settings};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("trailgrid {}", trailgrid_app::version::version());

    match trailgrid_app::run(cli, Settings::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
