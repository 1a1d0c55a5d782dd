//! The surface provider seam.
//!
//! A surface owns one or more equally sized pixel buffers ("faces"). Edits
//! follow a read, edit, stage, commit cycle: [`Surface::pixels`] hands out a
//! copy, [`Surface::set_pixels`] stages a replacement, and [`Surface::apply`]
//! commits everything staged in one go. Readers of committed pixels never see
//! a half-drawn update.

use crate::colors::Color;
use crate::error::Result;
use crate::render::framebuffer::PixelBuffer;

pub trait Surface {
    /// How a face is addressed. `()` for single-buffer surfaces.
    type Face: Copy + std::fmt::Debug;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Every face of this surface, in index order.
    fn faces(&self) -> Vec<Self::Face>;

    /// A copy of the face's current content (staged if any, else committed).
    fn pixels(&self, face: Self::Face) -> PixelBuffer;

    /// Stage new content for a face. Nothing is visible until [`Surface::apply`].
    ///
    /// Fails with [`Error::DimensionMismatch`](crate::Error::DimensionMismatch)
    /// if the buffer isn't the surface's size.
    fn set_pixels(&mut self, face: Self::Face, pixels: PixelBuffer) -> Result<()>;

    /// Commit all staged faces at once.
    fn apply(&mut self);

    fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// Stage a uniformly colored buffer for one face.
    fn clear_face(&mut self, face: Self::Face, color: Color) -> Result<()> {
        let blank = PixelBuffer::filled(self.width(), self.height(), color);
        self.set_pixels(face, blank)
    }

    /// Clear every face and commit.
    fn clear(&mut self, color: Color) -> Result<()> {
        for face in self.faces() {
            self.clear_face(face, color)?;
        }
        self.apply();
        Ok(())
    }
}
