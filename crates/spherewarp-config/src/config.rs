//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spherewarp_cubemap::PanoramaSpec;
use spherewarp_lens::LensSpec;
use spherewarp_raster::{Color, Interpolation, Sampler, VirtualPixel};

use crate::error::ConfigError;

const APP_NAME: &str = "spherewarp";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Sampling and threading.
    pub render: RenderConfig,
    /// Default lens for `fisheye`.
    pub lens: LensSpec,
    /// Default output for `cube2sphere`.
    pub panorama: PanoramaConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Sampling and threading configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Worker threads (0 = one per logical CPU).
    pub threads: usize,
    /// Reconstruction filter.
    pub interpolation: Interpolation,
    /// Policy for fisheye samples outside the source image.
    pub virtual_pixel: VirtualPixel,
    /// Blend alpha like the color channels.
    pub interpolate_alpha: bool,
}

/// Panorama output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanoramaConfig {
    /// Output width (default: four face widths).
    pub width: Option<u32>,
    /// Output height (default: two face widths).
    pub height: Option<u32>,
    /// Fill for directions that strike no face.
    pub background: Color,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs next to the config file in debug builds.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            interpolation: Interpolation::Bilinear,
            virtual_pixel: VirtualPixel::Edge,
            interpolate_alpha: true,
        }
    }
}

impl Default for PanoramaConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            background: Color::BLACK,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

/// Platform config directory for spherewarp, e.g. `~/.config/spherewarp`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

impl Config {
    /// Sampler built from the render settings.
    pub fn sampler(&self) -> Sampler {
        Sampler::new(self.render.interpolation, self.render.virtual_pixel)
            .with_alpha_interpolation(self.render.interpolate_alpha)
    }

    /// Panorama description built from the panorama and render settings.
    pub fn panorama_spec(&self) -> PanoramaSpec {
        PanoramaSpec {
            width: self.panorama.width,
            height: self.panorama.height,
            background: self.panorama.background,
            interpolation: self.render.interpolation,
            interpolate_alpha: self.render.interpolate_alpha,
        }
    }

    /// Check the `lens` section before any image is read.
    pub fn validate_lens(&self) -> Result<(), ConfigError> {
        Ok(self.lens.validate()?)
    }

    /// Check the `panorama` section before any face is read.
    pub fn validate_panorama(&self) -> Result<(), ConfigError> {
        if self.panorama.width == Some(0) {
            return Err(ConfigError::PanoramaSize("width"));
        }
        if self.panorama.height == Some(0) {
            return Err(ConfigError::PanoramaSize("height"));
        }
        Ok(())
    }
}

// --- Load / Save ---

/// File name of the persisted config inside a config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
    ron::from_str(&contents).map_err(ConfigError::ParseError)
}

impl Config {
    /// Read `config.ron` from `config_dir`, writing the defaults there first
    /// when the file does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            let defaults = Config::default();
            defaults.save(config_dir)?;
            log::info!("Wrote default settings to {}", path.display());
            return Ok(defaults);
        }
        let config = read_config(&path)?;
        log::debug!("Read settings from {}", path.display());
        Ok(config)
    }

    /// Write `config.ron` into `config_dir`, creating the directory if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let text = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;
        std::fs::write(config_dir.join(CONFIG_FILE_NAME), text).map_err(ConfigError::WriteError)
    }
}

#[cfg(test)]
mod tests {
    use spherewarp_lens::{LensError, LensFamily};

    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("interpolation: bilinear"));
        assert!(ron_str.contains("ifov: 120.0"));
        assert!(ron_str.contains("log_level: \"info\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.lens.family = LensFamily::Stereographic;
        config.lens.center = Some((10.0, 20.5));
        config.render.virtual_pixel = VirtualPixel::Constant(Color::rgb(1, 2, 3));
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(render: (threads: 3), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.render.threads, 3);
        assert_eq!(config.render.interpolation, Interpolation::Bilinear);
        assert_eq!(config.lens, LensSpec::default());
        assert_eq!(config.panorama, PanoramaConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.render.threads = 4;
        config.lens.ofov = 160.0;
        config.panorama.width = Some(2048);

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_panorama_spec_carries_render_filter() {
        let mut config = Config::default();
        config.render.interpolation = Interpolation::Nearest;
        config.render.interpolate_alpha = false;
        config.panorama.height = Some(300);
        let spec = config.panorama_spec();
        assert_eq!(spec.interpolation, Interpolation::Nearest);
        assert!(!spec.interpolate_alpha);
        assert_eq!(spec.output_size(64).unwrap(), (600, 300));
    }

    #[test]
    fn test_validate_checks_each_section_separately() {
        let mut config = Config::default();
        assert!(config.validate_lens().is_ok());
        assert!(config.validate_panorama().is_ok());

        config.lens.ofov = 200.0;
        assert!(matches!(
            config.validate_lens(),
            Err(ConfigError::Lens(LensError::OutputFov(_)))
        ));
        // A broken lens does not concern panorama stitching.
        assert!(config.validate_panorama().is_ok());

        config.panorama.width = Some(0);
        assert!(matches!(
            config.validate_panorama(),
            Err(ConfigError::PanoramaSize("width"))
        ));
    }
}
