//! The four classical fisheye laws relating image radius to off-axis angle.
//!
//! Every law is parameterized by the fisheye diameter `dim` (pixels) and its
//! field of view `fov` (degrees), and maps the rim `r = dim / 2` to
//! `phi = fov / 2`. All four agree at the center (`r = 0 → phi = 0`) and are
//! strictly increasing on their valid domain.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LensError;

/// Fisheye projection law.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LensFamily {
    /// Equidistant: `r ∝ phi`.
    #[default]
    Linear,
    /// Equisolid angle: `r ∝ sin(phi / 2)`.
    EqualArea,
    /// `r ∝ sin(phi)`; cannot see past 90°.
    Orthographic,
    /// Conformal: `r ∝ tan(phi / 2)`.
    Stereographic,
}

impl LensFamily {
    /// All four laws.
    pub const ALL: [LensFamily; 4] = [
        LensFamily::Linear,
        LensFamily::EqualArea,
        LensFamily::Orthographic,
        LensFamily::Stereographic,
    ];

    /// Angle from the optical axis (radians) seen at radius `r`.
    ///
    /// Returns `None` when `r` lies outside the law's visible field, which
    /// happens for the arcsine laws once `r` passes the rim of a full
    /// hemisphere.
    #[must_use]
    pub fn radius_to_angle(self, r: f64, dim: f64, fov: f64) -> Option<f64> {
        match self {
            LensFamily::Linear => Some(r * (fov * PI) / (dim * 180.0)),
            LensFamily::EqualArea => {
                checked_asin(r * 2.0 * (fov * PI / 720.0).sin() / dim).map(|a| 2.0 * a)
            }
            LensFamily::Orthographic => checked_asin(r * 2.0 * (fov * PI / 360.0).sin() / dim),
            LensFamily::Stereographic => {
                Some(2.0 * (r * 2.0 * (fov * PI / 720.0).tan() / dim).atan())
            }
        }
    }

    /// Radius at which a ray `phi` radians off axis lands. Exact inverse of
    /// [`radius_to_angle`](Self::radius_to_angle).
    ///
    /// Returns `None` for angles the law cannot image.
    #[must_use]
    pub fn angle_to_radius(self, phi: f64, dim: f64, fov: f64) -> Option<f64> {
        if !(0.0..=PI).contains(&phi) {
            return None;
        }
        match self {
            LensFamily::Linear => Some(phi * dim * 180.0 / (fov * PI)),
            LensFamily::EqualArea => Some(dim * (phi / 2.0).sin() / (2.0 * (fov * PI / 720.0).sin())),
            LensFamily::Orthographic => {
                (phi <= FRAC_PI_2).then(|| dim * phi.sin() / (2.0 * (fov * PI / 360.0).sin()))
            }
            LensFamily::Stereographic => {
                (phi < PI).then(|| dim * (phi / 2.0).tan() / (2.0 * (fov * PI / 720.0).tan()))
            }
        }
    }
}

fn checked_asin(x: f64) -> Option<f64> {
    (-1.0..=1.0).contains(&x).then(|| x.asin())
}

impl fmt::Display for LensFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LensFamily::Linear => "linear",
            LensFamily::EqualArea => "equalarea",
            LensFamily::Orthographic => "orthographic",
            LensFamily::Stereographic => "stereographic",
        })
    }
}

impl FromStr for LensFamily {
    type Err = LensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "equidistant" => Ok(LensFamily::Linear),
            "equalarea" | "equal-area" | "equal_area" | "equisolid" => Ok(LensFamily::EqualArea),
            "orthographic" => Ok(LensFamily::Orthographic),
            "stereographic" => Ok(LensFamily::Stereographic),
            _ => Err(LensError::UnknownName {
                kind: "lens family",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIM: f64 = 400.0;
    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_center_maps_to_axis() {
        for family in LensFamily::ALL {
            assert_eq!(family.radius_to_angle(0.0, DIM, 180.0), Some(0.0), "{family}");
            assert_eq!(family.angle_to_radius(0.0, DIM, 180.0), Some(0.0), "{family}");
        }
    }

    #[test]
    fn test_rim_maps_to_half_fov() {
        for family in LensFamily::ALL {
            for fov in [30.0, 90.0, 150.0, 180.0] {
                let phi = family.radius_to_angle(DIM / 2.0, DIM, fov).unwrap();
                assert!(
                    (phi - (fov / 2.0).to_radians()).abs() < EPSILON,
                    "{family} fov={fov}: rim angle {phi}"
                );
            }
        }
    }

    #[test]
    fn test_radius_to_angle_strictly_increasing() {
        for family in LensFamily::ALL {
            let mut prev = -1.0;
            for k in 0..=200 {
                let r = DIM / 2.0 * f64::from(k) / 200.0;
                let phi = family.radius_to_angle(r, DIM, 170.0).unwrap();
                assert!(phi > prev, "{family} not increasing at r={r}");
                prev = phi;
            }
        }
    }

    #[test]
    fn test_angle_radius_roundtrip() {
        for family in LensFamily::ALL {
            for k in 0..=100 {
                let r = DIM / 2.0 * f64::from(k) / 100.0;
                let phi = family.radius_to_angle(r, DIM, 160.0).unwrap();
                let back = family.angle_to_radius(phi, DIM, 160.0).unwrap();
                assert!((back - r).abs() < 1e-6, "{family}: {r} -> {phi} -> {back}");
            }
        }
    }

    #[test]
    fn test_arcsine_laws_reject_beyond_field() {
        // A full-hemisphere orthographic lens has nothing past its rim.
        assert!(LensFamily::Orthographic
            .radius_to_angle(DIM, DIM, 180.0)
            .is_none());
        assert!(LensFamily::EqualArea
            .radius_to_angle(DIM * 2.0, DIM, 180.0)
            .is_none());
        assert!(LensFamily::Orthographic
            .angle_to_radius(FRAC_PI_2 + 0.1, DIM, 180.0)
            .is_none());
    }

    #[test]
    fn test_linear_and_stereographic_extend_past_rim() {
        assert!(LensFamily::Linear.radius_to_angle(DIM, DIM, 180.0).is_some());
        assert!(LensFamily::Stereographic
            .radius_to_angle(DIM, DIM, 180.0)
            .is_some());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Equal-Area".parse::<LensFamily>().unwrap(), LensFamily::EqualArea);
        assert_eq!("equidistant".parse::<LensFamily>().unwrap(), LensFamily::Linear);
        for family in LensFamily::ALL {
            assert_eq!(family.to_string().parse::<LensFamily>().unwrap(), family);
        }
        assert!(matches!(
            "fish".parse::<LensFamily>(),
            Err(LensError::UnknownName { .. })
        ));
    }
}
