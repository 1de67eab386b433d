//! Pinhole (perspective) camera relations used on the non-fisheye side.

/// Focal length in pixels of a pinhole camera whose image spans `dim` pixels
/// across a field of view of `fov` degrees.
#[inline]
#[must_use]
pub fn focal_length(dim: f64, fov: f64) -> f64 {
    dim / (2.0 * (fov.to_radians() / 2.0).tan())
}

/// Distance from the principal point at which a ray `phi` radians off axis
/// lands on a pinhole image with focal length `f`.
#[inline]
#[must_use]
pub fn angle_to_source_offset(phi: f64, f: f64) -> f64 {
    f * phi.tan()
}

/// Inverse of [`angle_to_source_offset`].
#[inline]
#[must_use]
pub fn source_offset_to_angle(r: f64, f: f64) -> f64 {
    (r / f).atan()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_ninety_degree_fov_focal_is_half_width() {
        assert!((focal_length(200.0, 90.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_focal_length_matches_formula() {
        let expected = 200.0 / (2.0 * (120.0 * std::f64::consts::PI / 360.0).tan());
        assert!((focal_length(200.0, 120.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_source_offset_strictly_increasing() {
        let f = focal_length(640.0, 100.0);
        let mut prev = angle_to_source_offset(1e-6, f);
        for k in 1..1000 {
            let phi = FRAC_PI_2 * f64::from(k) / 1000.0;
            let r = angle_to_source_offset(phi, f);
            assert!(r > prev, "not increasing at phi={phi}");
            prev = r;
        }
    }

    #[test]
    fn test_offset_angle_roundtrip() {
        let f = 321.0;
        for k in 0..89 {
            let phi = f64::from(k).to_radians();
            let back = source_offset_to_angle(angle_to_source_offset(phi, f), f);
            assert!((back - phi).abs() < 1e-12);
        }
    }
}
