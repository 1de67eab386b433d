//! `spherewarp`: fisheye lens simulation and cube-map panorama stitching.
//!
//! Run with: `cargo run -p spherewarp-cli -- fisheye in.png out.png --ofov 160`

mod commands;

use std::process::ExitCode;

use clap::Parser;
use spherewarp_config::{CliArgs, Command, default_config_dir};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = match commands::load_config(config_dir.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("spherewarp: {e}");
            return ExitCode::FAILURE;
        }
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    spherewarp_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    let result = match &args.command {
        Command::Fisheye(fisheye) => commands::fisheye(&config, fisheye),
        Command::Cube2sphere(panorama) => commands::cube2sphere(&config, panorama),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("spherewarp: {e}");
            ExitCode::FAILURE
        }
    }
}
