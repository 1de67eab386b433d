//! Configuration for the spherewarp tools.
//!
//! Default render, lens, and panorama settings persist to disk as RON and
//! can be overridden from the command line.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Command, FisheyeArgs, PanoramaArgs};
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, PanoramaConfig, RenderConfig, default_config_dir,
};
pub use error::ConfigError;
