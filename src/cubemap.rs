//! Six-faced cube surfaces.
//!
//! Faces are plain tags indexing into a fixed array of buffers; every face
//! has the same, square, dimensions.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::colors::{Color, BLACK};
use crate::error::{Error, Result};
use crate::render::framebuffer::PixelBuffer;
use crate::surface::Surface;
use crate::texture::{check_dimensions, save_buffer};

pub const FACE_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubeFace {
    pub const ALL: [CubeFace; FACE_COUNT] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            CubeFace::PositiveX => "positive-x",
            CubeFace::NegativeX => "negative-x",
            CubeFace::PositiveY => "positive-y",
            CubeFace::NegativeY => "negative-y",
            CubeFace::PositiveZ => "positive-z",
            CubeFace::NegativeZ => "negative-z",
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CubeFace {
    type Err = Error;

    /// Accepts `positive-x`, `pos-x` and `+x` style names (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let face = match s.trim().to_ascii_lowercase().as_str() {
            "positive-x" | "pos-x" | "+x" => CubeFace::PositiveX,
            "negative-x" | "neg-x" | "-x" => CubeFace::NegativeX,
            "positive-y" | "pos-y" | "+y" => CubeFace::PositiveY,
            "negative-y" | "neg-y" | "-y" => CubeFace::NegativeY,
            "positive-z" | "pos-z" | "+z" => CubeFace::PositiveZ,
            "negative-z" | "neg-z" | "-z" => CubeFace::NegativeZ,
            _ => return Err(Error::UnknownFace(s.to_string())),
        };
        Ok(face)
    }
}

/// A cube map: six square faces of one shared size.
pub struct CubeMap {
    size: u32,
    faces: [PixelBuffer; FACE_COUNT],
    staged: [Option<PixelBuffer>; FACE_COUNT],
}

impl CubeMap {
    /// A cube map with every face black.
    pub fn new(size: u32) -> Self {
        Self::filled(size, BLACK)
    }

    pub fn filled(size: u32, color: Color) -> Self {
        Self {
            size,
            faces: std::array::from_fn(|_| PixelBuffer::filled(size, size, color)),
            staged: Default::default(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// The committed pixels of one face.
    pub fn face(&self, face: CubeFace) -> &PixelBuffer {
        &self.faces[face.index()]
    }

    /// Number of faces staged but not yet applied.
    pub fn pending(&self) -> usize {
        self.staged.iter().filter(|s| s.is_some()).count()
    }

    /// Write every committed face to `<dir>/<face>.png`.
    pub fn save_faces<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        for face in CubeFace::ALL {
            save_buffer(self.face(face), &dir.join(format!("{face}.png")))?;
        }
        Ok(())
    }
}

impl Surface for CubeMap {
    type Face = CubeFace;

    fn width(&self) -> u32 {
        self.size
    }

    fn height(&self) -> u32 {
        self.size
    }

    fn faces(&self) -> Vec<CubeFace> {
        CubeFace::ALL.to_vec()
    }

    fn pixels(&self, face: CubeFace) -> PixelBuffer {
        let i = face.index();
        self.staged[i].as_ref().unwrap_or(&self.faces[i]).clone()
    }

    fn set_pixels(&mut self, face: CubeFace, pixels: PixelBuffer) -> Result<()> {
        check_dimensions((self.size, self.size), &pixels)?;
        self.staged[face.index()] = Some(pixels);
        Ok(())
    }

    fn apply(&mut self) {
        let mut committed = 0;
        for (face, staged) in self.faces.iter_mut().zip(self.staged.iter_mut()) {
            if let Some(pixels) = staged.take() {
                *face = pixels;
                committed += 1;
            }
        }
        trace!("committed {committed} cube map face(s)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;

    #[test]
    fn face_names_round_trip() {
        for face in CubeFace::ALL {
            assert_eq!(face.to_string().parse::<CubeFace>().unwrap(), face);
        }
        assert_eq!("+Y".parse::<CubeFace>().unwrap(), CubeFace::PositiveY);
        assert_eq!("neg-z".parse::<CubeFace>().unwrap(), CubeFace::NegativeZ);
        assert!("up".parse::<CubeFace>().is_err());
    }

    #[test]
    fn face_indices_follow_declaration_order() {
        let indices: Vec<usize> = CubeFace::ALL.iter().map(|f| f.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn faces_share_one_square_size() {
        let cube = CubeMap::new(8);
        assert!(cube.is_square());
        for face in CubeFace::ALL {
            assert_eq!(cube.face(face).dimensions(), (8, 8));
        }
    }

    #[test]
    fn apply_commits_staged_faces_together() {
        let mut cube = CubeMap::new(4);
        cube.set_pixels(CubeFace::PositiveY, PixelBuffer::filled(4, 4, WHITE))
            .unwrap();
        cube.set_pixels(CubeFace::NegativeX, PixelBuffer::filled(4, 4, WHITE))
            .unwrap();
        assert_eq!(cube.pending(), 2);
        assert_eq!(cube.face(CubeFace::PositiveY).pixels()[0], BLACK);

        cube.apply();
        assert_eq!(cube.pending(), 0);
        assert_eq!(cube.face(CubeFace::PositiveY).pixels()[0], WHITE);
        assert_eq!(cube.face(CubeFace::NegativeX).pixels()[0], WHITE);
        assert_eq!(cube.face(CubeFace::PositiveX).pixels()[0], BLACK);
    }

    #[test]
    fn faces_do_not_share_buffers() {
        let mut cube = CubeMap::new(2);
        let mut edited = cube.pixels(CubeFace::PositiveZ);
        edited.set(0, 0, WHITE);
        cube.set_pixels(CubeFace::PositiveZ, edited).unwrap();
        cube.apply();
        for face in CubeFace::ALL {
            let expected = if face == CubeFace::PositiveZ { WHITE } else { BLACK };
            assert_eq!(cube.face(face).get(0, 0), Some(expected));
        }
    }

    #[test]
    fn clear_resets_all_faces() {
        let mut cube = CubeMap::filled(3, WHITE);
        cube.clear(BLACK).unwrap();
        for face in CubeFace::ALL {
            assert!(cube.face(face).pixels().iter().all(|&c| c == BLACK));
        }
    }

    #[test]
    fn wrong_size_face_is_rejected() {
        let mut cube = CubeMap::new(4);
        let result = cube.set_pixels(CubeFace::PositiveX, PixelBuffer::filled(4, 5, WHITE));
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
        assert_eq!(cube.pending(), 0);
    }
}
