//! Floating point RGBA colors.
//!
//! Channels are stored as `f32` so that rasterizer intensities can be written
//! without quantization. Conversion to 8-bit only happens when a buffer is
//! handed off for display or encoding.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque gray with every channel set to `intensity`.
    ///
    /// The value is stored as is; intensities outside [0, 1] survive until
    /// [`Color::to_rgba8`].
    #[inline]
    pub const fn gray(intensity: f32) -> Self {
        Self::rgb(intensity, intensity, intensity)
    }

    /// Quantize to 8-bit RGBA, clamping each channel into [0, 1] first.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

#[inline]
fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
