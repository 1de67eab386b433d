//! The six faces of a cube map and their outward axes.
//!
//! Axis convention: `+x` forward, `+y` left, `+z` up.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::CubeMapError;

/// One face of a cube map, named by where it sits relative to a viewer at
/// the cube center looking forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CubeFace {
    /// +Y face
    Left = 0,
    /// +X face
    Front = 1,
    /// −Y face
    Right = 2,
    /// −X face
    Back = 3,
    /// +Z face
    Over = 4,
    /// −Z face
    Under = 5,
}

impl CubeFace {
    /// All six faces in canonical order; `ALL[face.index()] == face`.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Left,
        CubeFace::Front,
        CubeFace::Right,
        CubeFace::Back,
        CubeFace::Over,
        CubeFace::Under,
    ];

    /// Position in [`CubeFace::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The opposite face (e.g., `Left` → `Right`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::Left => CubeFace::Right,
            CubeFace::Right => CubeFace::Left,
            CubeFace::Front => CubeFace::Back,
            CubeFace::Back => CubeFace::Front,
            CubeFace::Over => CubeFace::Under,
            CubeFace::Under => CubeFace::Over,
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        match self {
            CubeFace::Left => DVec3::Y,
            CubeFace::Front => DVec3::X,
            CubeFace::Right => DVec3::NEG_Y,
            CubeFace::Back => DVec3::NEG_X,
            CubeFace::Over => DVec3::Z,
            CubeFace::Under => DVec3::NEG_Z,
        }
    }

    /// Direction of increasing image column (viewer's right) on this face.
    #[must_use]
    pub fn right(self) -> DVec3 {
        match self {
            CubeFace::Left => DVec3::X,
            CubeFace::Front => DVec3::NEG_Y,
            CubeFace::Right => DVec3::NEG_X,
            CubeFace::Back => DVec3::Y,
            CubeFace::Over => DVec3::NEG_Y,
            CubeFace::Under => DVec3::NEG_Y,
        }
    }

    /// Direction of increasing image row (down the image) on this face.
    #[must_use]
    pub fn down(self) -> DVec3 {
        match self {
            CubeFace::Left | CubeFace::Front | CubeFace::Right | CubeFace::Back => DVec3::NEG_Z,
            CubeFace::Over => DVec3::X,
            CubeFace::Under => DVec3::NEG_X,
        }
    }

    /// Lowercase name, as used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CubeFace::Left => "left",
            CubeFace::Front => "front",
            CubeFace::Right => "right",
            CubeFace::Back => "back",
            CubeFace::Over => "over",
            CubeFace::Under => "under",
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CubeFace {
    type Err = CubeMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        CubeFace::ALL
            .into_iter()
            .find(|face| face.name() == lower)
            .ok_or_else(|| CubeMapError::UnknownFace(s.to_string()))
    }
}
