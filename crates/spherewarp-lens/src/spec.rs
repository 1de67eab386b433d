//! User-facing lens description and its validation.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use spherewarp_raster::Color;

use crate::{LensError, LensFamily, LensGeometry, focal_length};

/// How the fisheye disk is fitted to the image when no explicit radius is given.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LensFormat {
    /// Disk inscribed in the image: radius is half the shorter side.
    #[default]
    Circular,
    /// Disk circumscribing the image: radius is half the diagonal.
    FullFrame,
}

impl FromStr for LensFormat {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circular" => Ok(LensFormat::Circular),
            "fullframe" | "full-frame" | "full_frame" => Ok(LensFormat::FullFrame),
            _ => Err(LensError::UnknownName {
                kind: "lens format",
                value: s.to_string(),
            }),
        }
    }
}

/// Which side of the lens the source image is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FisheyeDirection {
    /// Perspective source, fisheye output.
    #[default]
    ToFisheye,
    /// Fisheye source, perspective output.
    FromFisheye,
}

impl fmt::Display for FisheyeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FisheyeDirection::ToFisheye => "to-fisheye",
            FisheyeDirection::FromFisheye => "from-fisheye",
        })
    }
}

/// Description of a fisheye lens and the perspective camera it pairs with.
///
/// `ifov` always belongs to the perspective image and `ofov` to the fisheye
/// image, whichever of the two is the source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensSpec {
    /// Perspective field of view in degrees, in (0, 180).
    pub ifov: f64,
    /// Fisheye field of view in degrees, in (0, 180].
    pub ofov: f64,
    /// Projection law of the fisheye.
    pub family: LensFamily,
    /// How the disk is fitted when `radius` is not given.
    pub format: LensFormat,
    /// Optical center in pixels. Defaults to the image center.
    pub center: Option<(f64, f64)>,
    /// Fisheye radius in pixels. Overrides `format` when set.
    pub radius: Option<f64>,
    /// Rotation of the fisheye about its axis, degrees in [0, 360).
    pub angle: f64,
    /// Fill for fisheye pixels outside the lens disk.
    pub background: Color,
}

impl Default for LensSpec {
    fn default() -> Self {
        Self {
            ifov: 120.0,
            ofov: 180.0,
            family: LensFamily::Linear,
            format: LensFormat::Circular,
            center: None,
            radius: None,
            angle: 0.0,
            background: Color::BLACK,
        }
    }
}

impl LensSpec {
    /// Check every numeric constraint. Non-finite values always fail.
    pub fn validate(&self) -> Result<(), LensError> {
        if !(self.ifov > 0.0 && self.ifov < 180.0) {
            return Err(LensError::InputFov(self.ifov));
        }
        if !(self.ofov > 0.0 && self.ofov <= 180.0) {
            return Err(LensError::OutputFov(self.ofov));
        }
        if let Some(r) = self.radius
            && !(r.is_finite() && r > 0.0)
        {
            return Err(LensError::Radius(r));
        }
        if !(self.angle >= 0.0 && self.angle < 360.0) {
            return Err(LensError::Angle(self.angle));
        }
        if let Some((cx, cy)) = self.center
            && !(cx.is_finite() && cy.is_finite())
        {
            return Err(LensError::Center(cx, cy));
        }
        Ok(())
    }

    /// Validate and fix the lens to an image of `width` × `height` pixels.
    pub fn resolve(&self, width: u32, height: u32) -> Result<LensGeometry, LensError> {
        self.validate()?;
        if width == 0 || height == 0 {
            return Err(LensError::EmptyImage { width, height });
        }
        let (w, h) = (f64::from(width), f64::from(height));

        let center = match self.center {
            Some((cx, cy)) => DVec2::new(cx, cy),
            None => DVec2::new((w - 1.0) / 2.0, (h - 1.0) / 2.0),
        };
        let radius = self.radius.unwrap_or(match self.format {
            LensFormat::Circular => w.min(h) / 2.0,
            LensFormat::FullFrame => w.hypot(h) / 2.0,
        });

        Ok(LensGeometry::new(
            self.family,
            self.ofov,
            center,
            radius,
            focal_length(w, self.ifov),
            self.angle,
        ))
    }
}
