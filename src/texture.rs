use std::path::Path;

use log::info;

use crate::colors::{Color, BLACK};
use crate::error::{Error, Result};
use crate::render::framebuffer::PixelBuffer;
use crate::surface::Surface;

/// A single-face 2D texture.
pub struct Texture {
    committed: PixelBuffer,       // What readers see.
    staged: Option<PixelBuffer>,  // Written by set_pixels, committed by apply.
}

impl Texture {
    /// A black texture of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, BLACK)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            committed: PixelBuffer::filled(width, height, color),
            staged: None,
        }
    }

    // Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        let committed =
            PixelBuffer::from_fn(width, height, |x, y| Color::from_rgba8(img.get_pixel(x, y).0));

        Ok(Self {
            committed,
            staged: None,
        })
    }

    /// The committed pixels, as a display would read them.
    pub fn committed(&self) -> &PixelBuffer {
        &self.committed
    }

    /// Write the committed pixels to an image file. The format follows the
    /// file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_buffer(&self.committed, path.as_ref())
    }
}

impl Surface for Texture {
    type Face = ();

    fn width(&self) -> u32 {
        self.committed.width()
    }

    fn height(&self) -> u32 {
        self.committed.height()
    }

    fn faces(&self) -> Vec<()> {
        vec![()]
    }

    fn pixels(&self, _face: ()) -> PixelBuffer {
        self.staged.as_ref().unwrap_or(&self.committed).clone()
    }

    fn set_pixels(&mut self, _face: (), pixels: PixelBuffer) -> Result<()> {
        check_dimensions(self.committed.dimensions(), &pixels)?;
        self.staged = Some(pixels);
        Ok(())
    }

    fn apply(&mut self) {
        if let Some(pixels) = self.staged.take() {
            self.committed = pixels;
        }
    }
}

pub(crate) fn check_dimensions(expected: (u32, u32), pixels: &PixelBuffer) -> Result<()> {
    if pixels.dimensions() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: pixels.dimensions(),
        });
    }
    Ok(())
}

pub(crate) fn save_buffer(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        &buffer.to_rgba8(),
        buffer.width(),
        buffer.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    info!(
        "saved {}x{} image to {}",
        buffer.width(),
        buffer.height(),
        path.display()
    );
    Ok(())
}
