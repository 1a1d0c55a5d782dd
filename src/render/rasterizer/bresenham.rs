use super::{LineRasterizer, LineSpec, PixelSink};

/// Plots a 1 pixel wide line from (x0, y0) to (x1, y1), both inclusive.
///
/// Integer-only Bresenham in the symmetric error form: `dx` and `dy` (kept
/// negative) share one error term, and the doubled error is tested against
/// each axis independently. Both tests may pass in the same step, which is
/// a diagonal move, so every octant is handled without branching on slope.
///
/// `set_pixel` is called exactly once per pixel, in order from start to end.
/// The pixel count is `max(|x1 - x0|, |y1 - y0|) + 1`.
pub fn plot_line(x0: i32, y0: i32, x1: i32, y1: i32, mut set_pixel: impl FnMut(i32, i32)) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();

    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };

    let mut err = dx + dy;
    let mut x = x0;
    let mut y = y0;

    loop {
        set_pixel(x, y);

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += step_x;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += step_y;
        }
    }
}

/// Thin, aliased lines. Every pixel is reported at intensity 1.0 and the
/// requested width is ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct BresenhamRasterizer;

impl BresenhamRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl LineRasterizer for BresenhamRasterizer {
    fn draw_line(&self, line: &LineSpec, sink: &mut dyn PixelSink) {
        plot_line(
            line.start.x,
            line.start.y,
            line.end.x,
            line.end.y,
            |x, y| sink.write(x, y, 1.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
        let mut pixels = Vec::new();
        plot_line(x0, y0, x1, y1, |x, y| pixels.push((x, y)));
        pixels
    }

    #[test]
    fn visits_both_endpoints_in_every_octant() {
        let targets = [
            (7, 3),
            (3, 7),
            (-3, 7),
            (-7, 3),
            (-7, -3),
            (-3, -7),
            (3, -7),
            (7, -3),
            (5, 5),
            (-5, 5),
            (0, 6),
            (6, 0),
            (0, -6),
            (-6, 0),
        ];
        for (x1, y1) in targets {
            let pixels = trace(0, 0, x1, y1);
            assert_eq!(pixels.first(), Some(&(0, 0)), "start of line to ({x1}, {y1})");
            assert_eq!(pixels.last(), Some(&(x1, y1)), "end of line to ({x1}, {y1})");
        }
    }

    #[test]
    fn pixel_count_is_major_axis_length_plus_one() {
        let cases: [(i32, i32, i32, i32); 6] = [
            (0, 0, 10, 4),
            (2, -3, -9, 5),
            (-4, -4, 4, 4),
            (1, 1, 1, 12),
            (5, 2, -5, 2),
            (3, 3, 3, 3),
        ];
        for (x0, y0, x1, y1) in cases {
            let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            assert_eq!(trace(x0, y0, x1, y1).len(), expected);
        }
    }

    #[test]
    fn consecutive_pixels_are_neighbours() {
        let pixels = trace(-2, 9, 13, -1);
        for pair in pixels.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn diagonal_steps_both_axes_at_once() {
        assert_eq!(trace(0, 0, 3, 3), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn zero_length_line_is_one_pixel() {
        assert_eq!(trace(4, -2, 4, -2), vec![(4, -2)]);
    }

    #[test]
    fn rasterizer_reports_full_intensity() {
        let line = LineSpec::new((0, 0).into(), (4, 2).into(), 9.0);
        let mut hits = Vec::new();
        BresenhamRasterizer::new().draw_line(&line, &mut |x: i32, y: i32, i: f32| {
            hits.push((x, y, i))
        });
        assert_eq!(hits.len(), 5);
        assert!(hits.iter().all(|&(_, _, i)| i == 1.0));
    }
}
