//! Pixel storage and the bounds-checked view the rasterizer writes through.
//!
//! [`PixelBuffer`] owns a face's pixels. [`FrameBuffer`] is a temporary,
//! borrowed view over them that implements [`PixelSink`], which is how the
//! surface-agnostic rasterizer ends up writing into a concrete layout.

use crate::colors::Color;
use crate::render::rasterizer::PixelSink;

/// A rectangular, row-major block of colors.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

/// Create a `width * height` buffer with every pixel set to `color`.
///
/// Used both for first-time surface creation and for wiping a face before a
/// line is redrawn, so old lines never bleed into new ones.
pub fn fill(width: u32, height: u32, color: Color) -> PixelBuffer {
    PixelBuffer::filled(width, height, color)
}

impl PixelBuffer {
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            pixels: vec![color; buffer_len(width, height)],
            width,
            height,
        }
    }

    /// Build a buffer row by row, asking `pixel(x, y)` for every entry.
    pub fn from_fn(width: u32, height: u32, mut pixel: impl FnMut(u32, u32) -> Color) -> Self {
        let mut pixels = Vec::with_capacity(buffer_len(width, height));
        for y in 0..height {
            for x in 0..width {
                pixels.push(pixel(x, y));
            }
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set the color at (x, y). Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Flatten into 8-bit RGBA bytes, row by row.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    /// Borrow the pixels as a [`FrameBuffer`] the rasterizer can draw into.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.pixels, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

#[inline]
fn buffer_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// A view into a color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily while a line is drawn into a face or texture.
///
/// # Mirroring
///
/// As a [`PixelSink`], the view flips x: rasterizer pixel `(x, y)` lands at
/// index `y * width + (width - 1 - x)`. Texture space runs the other way
/// from the line's pixel space, and both the texture and the cube faces
/// share this layout.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [Color],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// # Panics
    /// Panics (in debug builds) if the buffer length doesn't match width * height
    pub fn new(color_buffer: &'a mut [Color], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            buffer_len(width, height),
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    /// Overwrite the horizontally mirrored pixel with gray `intensity`.
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_intensity_mirrored(&mut self, x: i32, y: i32, intensity: f32) {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            let mirrored_x = (self.width - 1 - x as u32) as usize;
            self.color_buffer[y as usize * self.width as usize + mirrored_x] =
                Color::gray(intensity);
        }
    }
}

impl PixelSink for FrameBuffer<'_> {
    #[inline]
    fn write(&mut self, x: i32, y: i32, intensity: f32) {
        self.set_intensity_mirrored(x, y, intensity);
    }
}
