//! A lens fixed to a concrete image: per-pixel mapping between the fisheye
//! disk and the perspective plane.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use crate::{
    FisheyeDirection, LensFamily, angle_to_source_offset, source_offset_to_angle,
};

/// Largest off-axis angle sent through the pinhole model. Rays at or past
/// the horizon land on a far point of the same ray instead of flipping sign.
const HORIZON: f64 = FRAC_PI_2 - 1e-9;

/// Where a destination pixel takes its value from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LensSample {
    /// Outside the lens disk or its visible field: use the background color.
    Background,
    /// Sample the source at this (possibly out-of-bounds) coordinate.
    Source(DVec2),
}

/// A validated [`LensSpec`](crate::LensSpec) resolved against image dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LensGeometry {
    family: LensFamily,
    ofov: f64,
    center: DVec2,
    radius: f64,
    focal: f64,
    /// `(cos, sin)` of the rotation angle.
    rotation: DVec2,
    rotated: bool,
}

impl LensGeometry {
    pub(crate) fn new(
        family: LensFamily,
        ofov: f64,
        center: DVec2,
        radius: f64,
        focal: f64,
        angle_deg: f64,
    ) -> Self {
        Self {
            family,
            ofov,
            center,
            radius,
            focal,
            rotation: DVec2::from_angle(angle_deg.to_radians()),
            rotated: angle_deg != 0.0,
        }
    }

    pub fn family(&self) -> LensFamily {
        self.family
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Fisheye disk radius in pixels.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Pinhole focal length of the perspective side, in pixels.
    pub fn focal(&self) -> f64 {
        self.focal
    }

    /// Diameter handed to the projection law.
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Map destination pixel `dest` for the given direction.
    #[inline]
    #[must_use]
    pub fn map(&self, direction: FisheyeDirection, dest: DVec2) -> LensSample {
        match direction {
            FisheyeDirection::ToFisheye => self.to_fisheye(dest),
            FisheyeDirection::FromFisheye => self.from_fisheye(dest),
        }
    }

    /// Destination is the fisheye image; returns a coordinate on the
    /// perspective source.
    #[must_use]
    pub fn to_fisheye(&self, dest: DVec2) -> LensSample {
        let offset = dest - self.center;
        let rd = offset.length();
        if rd > self.radius {
            return LensSample::Background;
        }
        let Some(phi) = self.family.radius_to_angle(rd, self.diameter(), self.ofov) else {
            return LensSample::Background;
        };
        let rr = angle_to_source_offset(phi.min(HORIZON), self.focal);
        let lens = self.rotate(offset, -1.0);
        let scale = if rd != 0.0 { rr / rd } else { 0.0 };
        LensSample::Source(lens * scale + self.center)
    }

    /// Destination is the perspective image; returns a coordinate on the
    /// fisheye source. Exact inverse of [`to_fisheye`](Self::to_fisheye).
    #[must_use]
    pub fn from_fisheye(&self, dest: DVec2) -> LensSample {
        let offset = dest - self.center;
        let rd = offset.length();
        let phi = source_offset_to_angle(rd, self.focal);
        let Some(rs) = self.family.angle_to_radius(phi, self.diameter(), self.ofov) else {
            return LensSample::Background;
        };
        if rs > self.radius {
            return LensSample::Background;
        }
        let lens = self.rotate(offset, 1.0);
        let scale = if rd != 0.0 { rs / rd } else { 0.0 };
        LensSample::Source(lens * scale + self.center)
    }

    /// Rotate by `sign` × the lens angle.
    fn rotate(&self, v: DVec2, sign: f64) -> DVec2 {
        if !self.rotated {
            return v;
        }
        DVec2::new(self.rotation.x, sign * self.rotation.y).rotate(v)
    }
}
