//! A 2D raster stored as row-major interleaved 8-bit channels.

use crate::{Color, PixelFormat, RasterError};

/// A 2D image stored as row-major interleaved pixels.
///
/// Sources are treated as immutable; a destination is allocated once per
/// reprojection and every pixel is written exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl RasterImage {
    /// Create a zero-filled image with the given dimensions and format.
    #[must_use]
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
            data: vec![0; buffer_len(width, height, format)],
        }
    }

    /// Create an image with every pixel set to `color`.
    #[must_use]
    pub fn filled(width: u32, height: u32, format: PixelFormat, color: Color) -> Self {
        let px = color.to_channels(format);
        let px = &px[..format.channels()];
        let mut data = Vec::with_capacity(buffer_len(width, height, format));
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(px);
        }
        Self {
            width,
            height,
            format,
            data,
        }
    }

    /// Wrap an existing buffer, checking that its length matches the dimensions.
    pub fn from_raw(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, RasterError> {
        let expected = buffer_len(width, height, format);
        if data.len() != expected {
            return Err(RasterError::BufferSize {
                width,
                height,
                format,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Caller guarantees the buffer length matches.
    pub(crate) fn from_parts(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            format,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Returns `true` if the image has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Bytes per row.
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.format.channels()
    }

    /// Channels of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let idx = self.offset(x, y);
        &self.data[idx..idx + self.format.channels()]
    }

    /// Overwrite the pixel at `(x, y)`. `px` must hold exactly one pixel.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds or `px` has the wrong length.
    pub fn put_pixel(&mut self, x: u32, y: u32, px: &[u8]) {
        let idx = self.offset(x, y);
        let n = self.format.channels();
        self.data[idx..idx + n].copy_from_slice(px);
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        y as usize * self.row_stride() + x as usize * self.format.channels()
    }
}

fn buffer_len(width: u32, height: u32, format: PixelFormat) -> usize {
    width as usize * height as usize * format.channels()
}
