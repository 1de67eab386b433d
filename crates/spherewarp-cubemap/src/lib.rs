//! Cube-map geometry: the six faces, dominant-axis face selection, and the
//! equirectangular directions that drive cube-to-panorama stitching.

mod cube_face;
mod equirect;
mod error;
mod face_coord;
mod face_set;
mod inverse;
mod panorama;

pub use cube_face::CubeFace;
pub use equirect::{equirect_direction, face_map};
pub use error::CubeMapError;
pub use face_coord::FaceCoord;
pub use face_set::CubeFaceSet;
pub use inverse::{direction_to_face, direction_to_face_coord};
pub use panorama::PanoramaSpec;
