//! Reflection line orchestration.
//!
//! [`update_line`] redraws a rotated line on a set of surface faces. The
//! [`Engine`] wraps it with the persistent state a viewer needs: the rotation
//! dial, the line width and the chosen rasterizer.

use log::{debug, warn};

use crate::colors::{Color, BLACK};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::render::framebuffer::fill;
use crate::render::rasterizer::{
    plot_thick_line_aa, LineRasterizer, LineSpec, RasterizerDispatcher, RasterizerType,
    ThickLineRasterizer,
};
use crate::surface::Surface;

/// Redraw the reference line, rotated by `angle` degrees, on each of `faces`.
///
/// Each face is wiped to black, drawn with the anti-aliased rasterizer and
/// staged; all staged faces are committed together at the end. An empty
/// `faces` slice commits nothing.
///
/// Fails with [`Error::NotSquare`] before touching any buffer if the surface
/// isn't square.
pub fn update_line<S: Surface>(
    surface: &mut S,
    faces: &[S::Face],
    angle: f32,
    width: f32,
) -> Result<()> {
    update_line_with(
        surface,
        faces,
        angle,
        width,
        BLACK,
        &ThickLineRasterizer::new(),
    )
}

/// [`update_line`] with an explicit background color and rasterizer.
pub fn update_line_with<S, R>(
    surface: &mut S,
    faces: &[S::Face],
    angle: f32,
    width: f32,
    background: Color,
    rasterizer: &R,
) -> Result<()>
where
    S: Surface,
    R: LineRasterizer + ?Sized,
{
    if !surface.is_square() {
        warn!(
            "refusing to draw a rotated line on a {}x{} surface",
            surface.width(),
            surface.height()
        );
        return Err(Error::NotSquare {
            width: surface.width(),
            height: surface.height(),
        });
    }

    if faces.is_empty() {
        return Ok(());
    }

    let size = surface.width();
    let line = LineSpec::reference(size, angle, width);

    for &face in faces {
        debug!(
            "drawing line on {face:?}: {:?} -> {:?} at {angle} degrees, width {width}",
            line.start, line.end
        );
        let mut pixels = fill(size, size, background);
        rasterizer.draw_line(&line, &mut pixels.as_framebuffer());
        surface.set_pixels(face, pixels)?;
    }

    surface.apply();
    Ok(())
}

/// Draw an unrotated vertical line through the middle of `face`, on top of
/// its current content, and commit it.
///
/// The line runs the full height, from `(mid, 0)` to `(mid, height - 1)` with
/// `mid = width / 2 - 1`. Unlike [`update_line`] this doesn't require a
/// square surface and doesn't wipe the face first.
pub fn draw_center_line<S: Surface>(surface: &mut S, face: S::Face, thickness: f32) -> Result<()> {
    let mut pixels = surface.pixels(face);
    let mid = surface.width() as i32 / 2 - 1;
    let bottom = surface.height() as i32 - 1;

    plot_thick_line_aa(mid, 0, mid, bottom, thickness, &mut pixels.as_framebuffer());

    surface.set_pixels(face, pixels)?;
    surface.apply();
    Ok(())
}

/// Bring an angle in degrees into [0, 360).
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// The current rotation of the line, always in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationDial {
    angle: f32,
}

impl RotationDial {
    pub fn new(angle: f32) -> Self {
        Self {
            angle: normalize_degrees(angle),
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Turn the dial by `delta` degrees (negative turns left) and return the
    /// new angle.
    pub fn rotate_by(&mut self, delta: f32) -> f32 {
        self.angle = normalize_degrees(self.angle + delta);
        self.angle
    }
}

pub struct Engine {
    rasterizer: RasterizerDispatcher,
    dial: RotationDial,
    rotation_step: f32,
    line_width: f32,
    background: Color,
}

impl Engine {
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            rasterizer: RasterizerDispatcher::new(config.rasterizer),
            dial: RotationDial::new(config.initial_angle),
            rotation_step: config.rotation_step,
            line_width: config.line_width,
            background: config.background,
        }
    }

    pub fn angle(&self) -> f32 {
        self.dial.angle()
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.dial = RotationDial::new(angle);
    }

    pub fn rotate_by(&mut self, delta: f32) -> f32 {
        self.dial.rotate_by(delta)
    }

    /// Turn the dial one step counter-clockwise.
    pub fn rotate_left(&mut self) -> f32 {
        self.dial.rotate_by(-self.rotation_step)
    }

    /// Turn the dial one step clockwise.
    pub fn rotate_right(&mut self) -> f32 {
        self.dial.rotate_by(self.rotation_step)
    }

    pub fn rotation_step(&self) -> f32 {
        self.rotation_step
    }

    pub fn set_rotation_step(&mut self, step: f32) {
        self.rotation_step = step;
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width.max(0.0);
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    /// Redraw the line at the dial's current angle on `faces`.
    pub fn update<S: Surface>(&self, surface: &mut S, faces: &[S::Face]) -> Result<()> {
        update_line_with(
            surface,
            faces,
            self.dial.angle(),
            self.line_width,
            self.background,
            &self.rasterizer,
        )
    }

    /// Wipe every face of `surface` to the background and commit.
    pub fn reset<S: Surface>(&self, surface: &mut S) -> Result<()> {
        debug!("resetting surface to {:?}", self.background);
        surface.clear(self.background)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
