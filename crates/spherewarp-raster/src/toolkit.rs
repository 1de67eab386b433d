//! Adapter over the `image` crate: decode, encode, and pixel-format normalization.
//!
//! The geometry crates never see file formats; they only receive
//! [`RasterImage`] values produced here.

use std::path::Path;

use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

use crate::{PixelFormat, RasterError, RasterImage};

/// Decode the image at `path`, normalizing deep or float formats to 8 bits.
pub fn load(path: &Path) -> Result<RasterImage, RasterError> {
    let decoded = image::open(path)?;
    Ok(RasterImage::from_dynamic(decoded))
}

/// Encode `raster` to `path`; the container format follows the file extension.
pub fn save(raster: &RasterImage, path: &Path) -> Result<(), RasterError> {
    raster.to_dynamic()?.save(path)?;
    Ok(())
}

/// Convert `raster` into `format`, going through the backend's color conversions.
pub fn normalize(raster: &RasterImage, format: PixelFormat) -> Result<RasterImage, RasterError> {
    if raster.format() == format {
        return Ok(raster.clone());
    }
    let converted = match format {
        PixelFormat::Gray => DynamicImage::ImageLuma8(raster.to_dynamic()?.to_luma8()),
        PixelFormat::GrayAlpha => DynamicImage::ImageLumaA8(raster.to_dynamic()?.to_luma_alpha8()),
        PixelFormat::Rgb => DynamicImage::ImageRgb8(raster.to_dynamic()?.to_rgb8()),
        PixelFormat::Rgba => DynamicImage::ImageRgba8(raster.to_dynamic()?.to_rgba8()),
    };
    Ok(RasterImage::from_dynamic(converted))
}

impl RasterImage {
    /// Take ownership of a decoded image. 8-bit layouts are kept as-is; every
    /// other layout is converted to 8-bit RGB or RGBA.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let (format, width, height, data) = match image {
            DynamicImage::ImageLuma8(buf) => (PixelFormat::Gray, buf.width(), buf.height(), buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => {
                (PixelFormat::GrayAlpha, buf.width(), buf.height(), buf.into_raw())
            }
            DynamicImage::ImageRgb8(buf) => (PixelFormat::Rgb, buf.width(), buf.height(), buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (PixelFormat::Rgba, buf.width(), buf.height(), buf.into_raw()),
            other if other.color().has_alpha() => {
                let buf = other.to_rgba8();
                (PixelFormat::Rgba, buf.width(), buf.height(), buf.into_raw())
            }
            other => {
                let buf = other.to_rgb8();
                (PixelFormat::Rgb, buf.width(), buf.height(), buf.into_raw())
            }
        };
        let channels = format.channels();
        debug_assert_eq!(data.len(), width as usize * height as usize * channels);
        Self::from_parts(width, height, format, data)
    }

    /// Copy into an `image` crate buffer of the matching layout.
    pub fn to_dynamic(&self) -> Result<DynamicImage, RasterError> {
        let (w, h) = self.dimensions();
        let data = self.as_raw().to_vec();
        let dynamic = match self.format() {
            PixelFormat::Gray => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
            PixelFormat::GrayAlpha => {
                GrayAlphaImage::from_raw(w, h, data).map(DynamicImage::ImageLumaA8)
            }
            PixelFormat::Rgb => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
            PixelFormat::Rgba => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        };
        dynamic.ok_or_else(|| RasterError::BufferSize {
            width: w,
            height: h,
            format: self.format(),
            expected: w as usize * h as usize * self.format().channels(),
            actual: self.as_raw().len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_save_and_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("face.png");

        let mut raster = RasterImage::filled(5, 3, PixelFormat::Rgba, Color::rgba(10, 20, 30, 200));
        raster.put_pixel(4, 2, &[255, 0, 0, 255]);
        save(&raster, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, raster);
    }

    #[test]
    fn test_load_missing_file_is_backend_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, RasterError::Backend(_)));
    }

    #[test]
    fn test_sixteen_bit_input_is_normalized() {
        let deep = image::ImageBuffer::<image::Luma<u16>, Vec<u16>>::from_pixel(
            2,
            2,
            image::Luma([u16::MAX]),
        );
        let raster = RasterImage::from_dynamic(DynamicImage::ImageLuma16(deep));
        assert_eq!(raster.format(), PixelFormat::Rgb);
        assert!(raster.as_raw().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_normalize_gray_to_rgba() {
        let gray = RasterImage::filled(2, 2, PixelFormat::Gray, Color::rgb(77, 77, 77));
        let rgba = normalize(&gray, PixelFormat::Rgba).unwrap();
        assert_eq!(rgba.format(), PixelFormat::Rgba);
        assert_eq!(rgba.pixel(1, 1), &[77, 77, 77, 255]);
    }
}
