//! Subcommand implementations: load, reproject, save.

use std::path::{Path, PathBuf};

use spherewarp_config::{Config, ConfigError, FisheyeArgs, PanoramaArgs};
use spherewarp_raster::{RasterError, toolkit};
use spherewarp_reproject::{
    CubeFace, CubeFaceSet, Execution, FisheyeDirection, PixelFormat, RasterImage, ReprojectError,
    reproject_cube_to_panorama_with, reproject_fisheye_with,
};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: RasterError,
    },

    #[error(transparent)]
    Reproject(#[from] ReprojectError),
}

fn load(path: &Path) -> Result<RasterImage, CommandError> {
    toolkit::load(path).map_err(|source| CommandError::Image {
        path: path.to_path_buf(),
        source,
    })
}

fn save(image: &RasterImage, path: &Path) -> Result<(), CommandError> {
    toolkit::save(image, path).map_err(|source| CommandError::Image {
        path: path.to_path_buf(),
        source,
    })
}

/// Settings from `config_dir`, created with defaults on first use. Without a
/// config directory the defaults are used as-is.
pub fn load_config(config_dir: Option<&Path>) -> Result<Config, CommandError> {
    match config_dir {
        Some(dir) => Ok(Config::load_or_create(dir)?),
        None => Ok(Config::default()),
    }
}

fn execution(config: &Config) -> Execution {
    Execution::with_threads(config.render.threads)
}

pub fn fisheye(config: &Config, args: &FisheyeArgs) -> Result<(), CommandError> {
    config.validate_lens()?;
    let source = load(&args.input)?;
    let direction = if args.inverse {
        FisheyeDirection::FromFisheye
    } else {
        FisheyeDirection::ToFisheye
    };
    info!(
        input = %args.input.display(),
        width = source.width(),
        height = source.height(),
        %direction,
        family = %config.lens.family,
        "Reprojecting"
    );

    let out = reproject_fisheye_with(
        &source,
        &config.lens,
        direction,
        &config.sampler(),
        &execution(config),
    )?;
    save(&out, &args.output)?;
    info!(output = %args.output.display(), "Saved");
    Ok(())
}

pub fn cube2sphere(config: &Config, args: &PanoramaArgs) -> Result<(), CommandError> {
    config.validate_panorama()?;
    let paths = [
        (CubeFace::Left, &args.left),
        (CubeFace::Front, &args.front),
        (CubeFace::Right, &args.right),
        (CubeFace::Back, &args.back),
        (CubeFace::Over, &args.over),
        (CubeFace::Under, &args.under),
    ];
    let mut tagged = Vec::with_capacity(paths.len());
    for (face, path) in paths {
        tagged.push((face, load(path)?));
    }

    // Faces decoded from mixed files share the richest format among them.
    let format = tagged
        .iter()
        .map(|(_, image)| image.format())
        .fold(PixelFormat::Gray, PixelFormat::union);
    let mut faces = Vec::with_capacity(tagged.len());
    for (face, image) in tagged {
        let image = if image.format() == format {
            image
        } else {
            toolkit::normalize(&image, format).map_err(|source| CommandError::Image {
                path: face_path(args, face).to_path_buf(),
                source,
            })?
        };
        faces.push((face, image));
    }
    let faces = CubeFaceSet::from_tagged(faces).map_err(ReprojectError::from)?;

    let spec = config.panorama_spec();
    let out = reproject_cube_to_panorama_with(&faces, &spec, &execution(config))?;
    save(&out, &args.output)?;
    info!(
        output = %args.output.display(),
        width = out.width(),
        height = out.height(),
        "Saved"
    );
    Ok(())
}

fn face_path(args: &PanoramaArgs, face: CubeFace) -> &Path {
    match face {
        CubeFace::Left => &args.left,
        CubeFace::Front => &args.front,
        CubeFace::Right => &args.right,
        CubeFace::Back => &args.back,
        CubeFace::Over => &args.over,
        CubeFace::Under => &args.under,
    }
}

#[cfg(test)]
mod tests {
    use spherewarp_config::CONFIG_FILE_NAME;
    use spherewarp_raster::Color;
    use spherewarp_reproject::LensFamily;

    use super::*;

    fn fisheye_args(input: PathBuf, output: PathBuf) -> FisheyeArgs {
        FisheyeArgs {
            input,
            output,
            ifov: None,
            ofov: None,
            family: None,
            format: None,
            center: None,
            radius: None,
            angle: None,
            background: None,
            virtual_pixel: None,
            inverse: false,
        }
    }

    #[test]
    fn test_fisheye_writes_same_size_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");
        save(&RasterImage::filled(40, 30, PixelFormat::Rgb, Color::GRAY), &input).unwrap();

        let mut config = Config::default();
        config.render.threads = 2;
        config.lens.family = LensFamily::Orthographic;
        fisheye(&config, &fisheye_args(input, output.clone())).unwrap();

        let out = load(&output).unwrap();
        assert_eq!(out.dimensions(), (40, 30));
        assert_eq!(out.pixel(0, 0), &[0, 0, 0]);
        assert_eq!(out.pixel(20, 15), &[128, 128, 128]);
    }

    #[test]
    fn test_invalid_lens_fails_before_reading_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.lens.ifov = 0.0;
        let args = fisheye_args(dir.path().join("missing.png"), dir.path().join("out.png"));
        let err = fisheye(&config, &args).unwrap_err();
        assert!(matches!(err, CommandError::Config(_)));
        assert!(!dir.path().join("out.png").exists());
    }

    #[test]
    fn test_missing_input_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let args = fisheye_args(dir.path().join("missing.png"), dir.path().join("out.png"));
        let err = fisheye(&Config::default(), &args).unwrap_err();
        assert!(err.to_string().contains("missing.png"));
    }

    #[test]
    fn test_malformed_config_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "(lens: (ifov: \"wide\"))").unwrap();
        let err = load_config(Some(dir.path())).unwrap_err();
        assert!(matches!(err, CommandError::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_config_dir_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("spherewarp");
        assert_eq!(load_config(Some(config_dir.as_path())).unwrap(), Config::default());
        assert!(config_dir.join(CONFIG_FILE_NAME).exists());
        assert_eq!(load_config(None).unwrap(), Config::default());
    }

    #[test]
    fn test_bad_lens_section_does_not_block_cube2sphere() {
        let dir = tempfile::tempdir().unwrap();
        let path = |name: &str| dir.path().join(format!("{name}.png"));
        for face in CubeFace::ALL {
            save(&RasterImage::filled(4, 4, PixelFormat::Rgb, Color::WHITE), &path(face.name())).unwrap();
        }
        let mut config = Config::default();
        config.lens.ifov = 0.0;
        let args = PanoramaArgs {
            output: path("pano"),
            left: path("left"),
            front: path("front"),
            right: path("right"),
            back: path("back"),
            over: path("over"),
            under: path("under"),
            width: None,
            height: None,
            background: None,
        };
        cube2sphere(&config, &args).unwrap();
        assert!(args.output.exists());

        config.panorama.height = Some(0);
        let err = cube2sphere(&config, &args).unwrap_err();
        assert!(matches!(err, CommandError::Config(ConfigError::PanoramaSize("height"))));
    }

    #[test]
    fn test_cube2sphere_normalizes_mixed_formats() {
        let dir = tempfile::tempdir().unwrap();
        let path = |name: &str| dir.path().join(format!("{name}.png"));
        for face in CubeFace::ALL {
            let format = if face == CubeFace::Over {
                PixelFormat::Gray
            } else {
                PixelFormat::Rgb
            };
            save(&RasterImage::filled(8, 8, format, Color::WHITE), &path(face.name())).unwrap();
        }
        let args = PanoramaArgs {
            output: path("pano"),
            left: path("left"),
            front: path("front"),
            right: path("right"),
            back: path("back"),
            over: path("over"),
            under: path("under"),
            width: None,
            height: None,
            background: None,
        };

        cube2sphere(&Config::default(), &args).unwrap();

        let out = load(&args.output).unwrap();
        assert_eq!(out.dimensions(), (32, 16));
        assert_eq!(out.format(), PixelFormat::Rgb);
        assert!(out.as_raw().iter().all(|&v| v == 255));
    }
}
