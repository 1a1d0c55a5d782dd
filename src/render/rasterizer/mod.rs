//! Line rasterization algorithms.
//!
//! The rasterizers know nothing about buffers. They walk pixels and hand
//! each one to a [`PixelSink`], which decides where (and whether) it lands.
//! Closures work as sinks, so a caller can write straight into any layout.
//!
//! Available algorithms:
//! - [`BresenhamRasterizer`]: 1 px wide integer line, every pixel at full intensity
//! - [`ThickLineRasterizer`]: anti-aliased line of arbitrary width

mod bresenham;
mod thick_aa;

pub use bresenham::{plot_line, BresenhamRasterizer};
pub use thick_aa::{plot_thick_line_aa, ThickLineRasterizer};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::math::point::Point2;

/// Receives the pixels a rasterizer produces.
///
/// `intensity` is the pixel's coverage: 0 is background, 1 is full
/// foreground. Sinks must discard or clamp coordinates outside their surface;
/// rasterizers never range-check.
pub trait PixelSink {
    fn write(&mut self, x: i32, y: i32, intensity: f32);
}

impl<F: FnMut(i32, i32, f32)> PixelSink for F {
    #[inline]
    fn write(&mut self, x: i32, y: i32, intensity: f32) {
        self(x, y, intensity)
    }
}

/// A line segment ready for rasterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSpec {
    pub start: Point2,
    pub end: Point2,
    /// Width in pixels. Zero still produces a 1 pixel line.
    pub width: f32,
}

impl LineSpec {
    pub fn new(start: Point2, end: Point2, width: f32) -> Self {
        Self { start, end, width }
    }

    /// The vertical reference line of a `size`-square face, rotated by
    /// `angle` degrees around the face's middle pixel.
    ///
    /// Unrotated it runs from `(mid, 0)` to `(mid, size - 2)` with
    /// `mid = size / 2 - 1`.
    pub fn reference(size: u32, angle: f32, width: f32) -> Self {
        let mid = size as i32 / 2 - 1;
        let center = Point2::new(mid, mid);
        let start = Point2::new(mid, 0).rotate_around(center, angle);
        let end = Point2::new(mid, size as i32 - 2).rotate_around(center, angle);
        Self::new(start, end, width)
    }
}

/// Trait for line rasterization algorithms.
///
/// Implementors define how a [`LineSpec`] turns into pixels. This allows
/// swapping between strategies at runtime, and the sink keeps every
/// strategy independent of the surface being drawn on.
pub trait LineRasterizer {
    fn draw_line(&self, line: &LineSpec, sink: &mut dyn PixelSink);
}

/// Available rasterization algorithms.
///
/// Use this enum to select which rasterizer the engine should use.
/// Can be changed at runtime via `Engine::set_rasterizer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RasterizerType {
    /// Plain Bresenham line. Ignores the requested width.
    #[serde(rename = "bresenham")]
    Bresenham,
    /// Anti-aliased line honoring the requested width.
    #[default]
    #[serde(rename = "thick-aa")]
    ThickAntiAliased,
}

impl fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterizerType::Bresenham => write!(f, "bresenham"),
            RasterizerType::ThickAntiAliased => write!(f, "thick-aa"),
        }
    }
}

impl FromStr for RasterizerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bresenham" => Ok(RasterizerType::Bresenham),
            "thick-aa" | "thick" | "aa" => Ok(RasterizerType::ThickAntiAliased),
            _ => Err(Error::UnknownRasterizer(s.to_string())),
        }
    }
}

/// Holds both rasterizer implementations and forwards to the active one.
#[derive(Debug)]
pub struct RasterizerDispatcher {
    bresenham: BresenhamRasterizer,
    thick: ThickLineRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            bresenham: BresenhamRasterizer::new(),
            thick: ThickLineRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl LineRasterizer for RasterizerDispatcher {
    #[inline]
    fn draw_line(&self, line: &LineSpec, sink: &mut dyn PixelSink) {
        match self.active {
            RasterizerType::Bresenham => self.bresenham.draw_line(line, sink),
            RasterizerType::ThickAntiAliased => self.thick.draw_line(line, sink),
        }
    }
}
