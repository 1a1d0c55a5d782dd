//! Integer pixel-space points and the 2D rotation used to place lines.

use std::ops::{Add, Sub};

/// A pixel coordinate. No bounds are implied; callers decide what is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotate this point around `center` by `degrees`.
    ///
    /// Uses the standard counter-clockwise rotation matrix in the buffer's
    /// own coordinate system. Both results are truncated toward zero after
    /// the rotation (relative to `center`), never rounded, so e.g. an offset
    /// of -1.41 lands on -1.
    pub fn rotate_around(self, center: Point2, degrees: f32) -> Point2 {
        // Reduce in degrees first so that a full turn is bit-for-bit periodic.
        let radians = degrees.rem_euclid(360.0).to_radians();
        let (s, c) = radians.sin_cos();

        let offset = self - center;
        let x = offset.x as f32 * c - offset.y as f32 * s;
        let y = offset.x as f32 * s + offset.y as f32 * c;

        Point2::new(x as i32, y as i32) + center
    }
}

/// Free-function form of [`Point2::rotate_around`].
#[inline]
pub fn rotate_point(point: Point2, center: Point2, degrees: f32) -> Point2 {
    point.rotate_around(center, degrees)
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Self::Output {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Self::Output {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point2 {
    fn from((x, y): (i32, i32)) -> Self {
        Point2::new(x, y)
    }
}
