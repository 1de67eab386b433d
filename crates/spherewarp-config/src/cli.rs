//! Command-line argument parsing for the `spherewarp` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use spherewarp_lens::{LensFamily, LensFormat};
use spherewarp_raster::{Color, Interpolation, VirtualPixel};

use crate::Config;

/// spherewarp command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "spherewarp", about = "Fisheye lens simulation and cube-map panorama stitching")]
pub struct CliArgs {
    /// Worker threads (0 = one per logical CPU).
    #[arg(long, global = true)]
    pub threads: Option<usize>,

    /// Interpolation (nearest, bilinear).
    #[arg(long, global = true)]
    pub interpolation: Option<Interpolation>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate a fisheye lens, or undo one with `--inverse`.
    Fisheye(FisheyeArgs),
    /// Stitch six cube faces into an equirectangular panorama.
    Cube2sphere(PanoramaArgs),
}

#[derive(Args, Debug)]
pub struct FisheyeArgs {
    /// Source image.
    pub input: PathBuf,

    /// Destination image; the format follows the extension.
    pub output: PathBuf,

    /// Perspective field of view in degrees.
    #[arg(long)]
    pub ifov: Option<f64>,

    /// Fisheye field of view in degrees.
    #[arg(long)]
    pub ofov: Option<f64>,

    /// Lens law (linear, equal-area, orthographic, stereographic).
    #[arg(long)]
    pub family: Option<LensFamily>,

    /// Disk fit (circular, full-frame).
    #[arg(long)]
    pub format: Option<LensFormat>,

    /// Optical center in pixels.
    #[arg(long, num_args = 2, value_names = ["X", "Y"])]
    pub center: Option<Vec<f64>>,

    /// Fisheye radius in pixels.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Lens rotation in degrees.
    #[arg(long)]
    pub angle: Option<f64>,

    /// Fill outside the lens disk (`#rrggbb`, `#rrggbbaa`, or a name).
    #[arg(long)]
    pub background: Option<Color>,

    /// Policy for samples outside the source (edge, mirror, wrap, transparent, or a color).
    #[arg(long)]
    pub virtual_pixel: Option<VirtualPixel>,

    /// Convert a fisheye image back to a perspective one.
    #[arg(long)]
    pub inverse: bool,
}

#[derive(Args, Debug)]
pub struct PanoramaArgs {
    /// Destination panorama.
    pub output: PathBuf,

    #[arg(long)]
    pub left: PathBuf,
    #[arg(long)]
    pub front: PathBuf,
    #[arg(long)]
    pub right: PathBuf,
    #[arg(long)]
    pub back: PathBuf,
    #[arg(long)]
    pub over: PathBuf,
    #[arg(long)]
    pub under: PathBuf,

    /// Panorama width (default: four face widths).
    #[arg(long)]
    pub width: Option<u32>,

    /// Panorama height (default: two face widths).
    #[arg(long)]
    pub height: Option<u32>,

    /// Fill for directions that strike no face.
    #[arg(long)]
    pub background: Option<Color>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(threads) = args.threads {
            self.render.threads = threads;
        }
        if let Some(interpolation) = args.interpolation {
            self.render.interpolation = interpolation;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }

        match &args.command {
            Command::Fisheye(fisheye) => self.apply_fisheye_overrides(fisheye),
            Command::Cube2sphere(panorama) => {
                if panorama.width.is_some() {
                    self.panorama.width = panorama.width;
                }
                if panorama.height.is_some() {
                    self.panorama.height = panorama.height;
                }
                if let Some(background) = panorama.background {
                    self.panorama.background = background;
                }
            }
        }
    }

    fn apply_fisheye_overrides(&mut self, args: &FisheyeArgs) {
        let lens = &mut self.lens;
        if let Some(ifov) = args.ifov {
            lens.ifov = ifov;
        }
        if let Some(ofov) = args.ofov {
            lens.ofov = ofov;
        }
        if let Some(family) = args.family {
            lens.family = family;
        }
        if let Some(format) = args.format {
            lens.format = format;
        }
        if let Some([x, y]) = args.center.as_deref() {
            lens.center = Some((*x, *y));
        }
        if args.radius.is_some() {
            lens.radius = args.radius;
        }
        if let Some(angle) = args.angle {
            lens.angle = angle;
        }
        if let Some(background) = args.background {
            lens.background = background;
        }
        if let Some(virtual_pixel) = args.virtual_pixel {
            self.render.virtual_pixel = virtual_pixel;
        }
    }
}
