//! Six validated face images, indexed by [`CubeFace`].

use std::ops::Index;

use spherewarp_raster::{PixelFormat, RasterImage};

use crate::{CubeFace, CubeMapError};

/// Six square face images of equal size and format.
///
/// The invariant is checked once at construction, so stitching never has
/// to look at mismatched faces.
#[derive(Clone, Debug)]
pub struct CubeFaceSet {
    faces: [RasterImage; 6],
}

impl CubeFaceSet {
    /// Build from images in [`CubeFace::ALL`] order.
    pub fn new(faces: [RasterImage; 6]) -> Result<Self, CubeMapError> {
        let reference = CubeFace::ALL[0];
        let (expected, _) = faces[0].dimensions();
        let expected_format = faces[0].format();

        for face in CubeFace::ALL {
            let image = &faces[face.index()];
            let (width, height) = image.dimensions();
            if width != height {
                return Err(CubeMapError::NotSquare {
                    face,
                    width,
                    height,
                });
            }
            if width == 0 {
                return Err(CubeMapError::Empty);
            }
            if width != expected {
                return Err(CubeMapError::SizeMismatch {
                    face,
                    dim: width,
                    reference,
                    expected,
                });
            }
            if image.format() != expected_format {
                return Err(CubeMapError::FormatMismatch {
                    face,
                    format: image.format(),
                    reference,
                    expected: expected_format,
                });
            }
        }
        Ok(Self { faces })
    }

    /// Build from `(face, image)` pairs in any order. Every face must appear
    /// exactly once.
    pub fn from_tagged(
        tagged: impl IntoIterator<Item = (CubeFace, RasterImage)>,
    ) -> Result<Self, CubeMapError> {
        let mut slots: [Option<RasterImage>; 6] = Default::default();
        for (face, image) in tagged {
            let slot = &mut slots[face.index()];
            if slot.is_some() {
                return Err(CubeMapError::DuplicateFace(face));
            }
            *slot = Some(image);
        }

        if let Some(face) = CubeFace::ALL.into_iter().find(|f| slots[f.index()].is_none()) {
            return Err(CubeMapError::MissingFace(face));
        }
        Self::new(slots.map(Option::unwrap_or_default))
    }

    /// Edge length shared by all faces.
    pub fn dim(&self) -> u32 {
        self.faces[0].width()
    }

    pub fn format(&self) -> PixelFormat {
        self.faces[0].format()
    }

    pub fn face(&self, face: CubeFace) -> &RasterImage {
        &self.faces[face.index()]
    }
}

impl Index<CubeFace> for CubeFaceSet {
    type Output = RasterImage;

    fn index(&self, face: CubeFace) -> &RasterImage {
        self.face(face)
    }
}

#[cfg(test)]
mod tests {
    use spherewarp_raster::Color;

    use super::*;

    fn solid(dim: u32, shade: u8) -> RasterImage {
        RasterImage::filled(dim, dim, PixelFormat::Rgb, Color::rgb(shade, shade, shade))
    }

    fn six(dim: u32) -> [RasterImage; 6] {
        std::array::from_fn(|i| solid(dim, i as u8 * 40))
    }

    #[test]
    fn test_faces_indexed_by_tag() {
        let set = CubeFaceSet::new(six(8)).unwrap();
        assert_eq!(set.dim(), 8);
        assert_eq!(set[CubeFace::Left].pixel(0, 0), &[0, 0, 0]);
        assert_eq!(set[CubeFace::Under].pixel(0, 0), &[200, 200, 200]);
    }

    #[test]
    fn test_rejects_non_square_face() {
        let mut faces = six(8);
        faces[CubeFace::Back.index()] = RasterImage::new(8, 7, PixelFormat::Rgb);
        assert_eq!(
            CubeFaceSet::new(faces).unwrap_err(),
            CubeMapError::NotSquare {
                face: CubeFace::Back,
                width: 8,
                height: 7
            }
        );
    }

    #[test]
    fn test_rejects_size_mismatch() {
        let mut faces = six(8);
        faces[CubeFace::Over.index()] = solid(9, 1);
        assert!(matches!(
            CubeFaceSet::new(faces),
            Err(CubeMapError::SizeMismatch {
                face: CubeFace::Over,
                dim: 9,
                expected: 8,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_format_mismatch() {
        let mut faces = six(4);
        faces[CubeFace::Right.index()] = RasterImage::new(4, 4, PixelFormat::Gray);
        assert!(matches!(
            CubeFaceSet::new(faces),
            Err(CubeMapError::FormatMismatch {
                face: CubeFace::Right,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_faces() {
        let faces = std::array::from_fn(|_| RasterImage::new(0, 0, PixelFormat::Rgb));
        assert_eq!(CubeFaceSet::new(faces).unwrap_err(), CubeMapError::Empty);
    }

    #[test]
    fn test_from_tagged_any_order() {
        let tagged = CubeFace::ALL
            .into_iter()
            .rev()
            .map(|face| (face, solid(4, face.index() as u8)));
        let set = CubeFaceSet::from_tagged(tagged).unwrap();
        for face in CubeFace::ALL {
            assert_eq!(set[face].pixel(1, 1)[0], face.index() as u8);
        }
    }

    #[test]
    fn test_from_tagged_missing_and_duplicate() {
        let five = CubeFace::ALL[..5].iter().map(|&f| (f, solid(4, 0)));
        assert_eq!(
            CubeFaceSet::from_tagged(five).unwrap_err(),
            CubeMapError::MissingFace(CubeFace::Under)
        );

        let dup = [(CubeFace::Front, solid(4, 0)), (CubeFace::Front, solid(4, 0))];
        assert_eq!(
            CubeFaceSet::from_tagged(dup).unwrap_err(),
            CubeMapError::DuplicateFace(CubeFace::Front)
        );
    }
}
