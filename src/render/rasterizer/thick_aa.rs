use super::{LineRasterizer, LineSpec, PixelSink};

/// Plots an anti-aliased line of the given `width` from (x0, y0) to (x1, y1).
///
/// Walks the same path as [`plot_line`](super::plot_line). At every step the
/// Bresenham error is also the (scaled) distance of a pixel from the ideal
/// segment, so the algorithm sweeps perpendicular to the step it just took
/// (an x step sweeps along y, a y step sweeps along x) until that distance
/// exceeds the half width, reporting each pixel's coverage to `sink`.
///
/// Coverage is `1 - falloff` with `falloff = |e| / ed - wd + 1`, where `ed`
/// is the segment length and `wd = (width + 1) / 2`. A negative falloff, i.e.
/// a pixel well inside the line, is reported as exactly 1.0, and so is a
/// negative coverage. The latter only happens for widths below 1, where the
/// half width is narrower than the path's own pixels.
///
/// A zero-length segment reports a single pixel at 1.0 for `width >= 1`.
/// Widths below 1 still produce a 1 pixel line, mostly at partial intensity.
/// Coordinates are never range-checked.
pub fn plot_thick_line_aa<S: PixelSink + ?Sized>(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: f32,
    sink: &mut S,
) {
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();

    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };

    let mut err = dx - dy;

    // Degenerate point: avoid dividing by zero.
    let ed = if dx + dy == 0 {
        1.0
    } else {
        f64::from(dx * dx + dy * dy).sqrt()
    };
    let wd = (f64::from(width) + 1.0) / 2.0;
    let reach = ed * wd;

    let mut x = x0;
    let mut y = y0;

    loop {
        sink.write(x, y, coverage(err - dx + dy, ed, wd));

        let mut e2 = err;
        let sweep_x = x;

        // x step: sweep along y
        if 2 * e2 >= -dx {
            e2 += dy;
            let mut sweep_y = y;
            while f64::from(e2) < reach && (y1 != sweep_y || dx > dy) {
                sweep_y += step_y;
                sink.write(x, sweep_y, coverage(e2, ed, wd));
                e2 += dx;
            }

            if x == x1 {
                break;
            }
            e2 = err;
            err -= dy;
            x += step_x;
        }

        // y step: sweep along x
        if 2 * e2 <= dy {
            e2 = dx - e2;
            let mut sweep_x = sweep_x;
            while f64::from(e2) < reach && (x1 != sweep_x || dx < dy) {
                sweep_x += step_x;
                sink.write(sweep_x, y, coverage(e2, ed, wd));
                e2 += dy;
            }

            if y == y1 {
                break;
            }
            err += dx;
            y += step_y;
        }
    }
}

#[inline]
fn coverage(error: i32, ed: f64, wd: f64) -> f32 {
    let falloff = f64::from(error.abs()) / ed - wd + 1.0;
    let intensity = 1.0 - falloff;
    if falloff < 0.0 || intensity < 0.0 {
        1.0
    } else {
        intensity as f32
    }
}

/// Anti-aliased lines of arbitrary width.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThickLineRasterizer;

impl ThickLineRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl LineRasterizer for ThickLineRasterizer {
    fn draw_line(&self, line: &LineSpec, sink: &mut dyn PixelSink) {
        plot_thick_line_aa(
            line.start.x,
            line.start.y,
            line.end.x,
            line.end.y,
            line.width,
            sink,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::BTreeSet;

    fn trace(x0: i32, y0: i32, x1: i32, y1: i32, width: f32) -> Vec<(i32, i32, f32)> {
        let mut hits = Vec::new();
        plot_thick_line_aa(x0, y0, x1, y1, width, &mut |x: i32, y: i32, i: f32| {
            hits.push((x, y, i))
        });
        hits
    }

    fn coords(hits: &[(i32, i32, f32)]) -> BTreeSet<(i32, i32)> {
        hits.iter().map(|&(x, y, _)| (x, y)).collect()
    }

    #[test]
    fn degenerate_point_is_a_single_full_pixel() {
        let hits = trace(5, 5, 5, 5, 3.0);
        assert_eq!(hits, vec![(5, 5, 1.0)]);
    }

    #[test]
    fn endpoints_are_full_intensity() {
        for width in [1.0, 2.0, 3.5, 6.0] {
            for (x0, y0, x1, y1) in [(0, 0, 7, 3), (2, 9, -4, 1), (0, 0, 0, 5), (3, 3, -6, 3)] {
                let hits = trace(x0, y0, x1, y1, width);
                assert_eq!(hits[0], (x0, y0, 1.0));
                assert!(
                    hits.contains(&(x1, y1, 1.0)),
                    "end ({x1}, {y1}) at width {width}"
                );
            }
        }
    }

    #[test]
    fn thin_vertical_line_has_no_sweep() {
        let hits = trace(5, 0, 5, 4, 1.0);
        let expected: Vec<_> = (0..=4).map(|y| (5, y, 1.0)).collect();
        assert_eq!(hits, expected);
    }

    #[test]
    fn vertical_line_grows_along_x() {
        let hits = trace(5, 0, 5, 4, 3.0);
        let expected: BTreeSet<_> = (0..=4).flat_map(|y| [(4, y), (5, y)]).collect();
        assert_eq!(coords(&hits), expected);
        assert!(hits.iter().all(|&(_, _, i)| i == 1.0));
    }

    #[test]
    fn horizontal_line_grows_along_y() {
        let hits = trace(0, 5, 4, 5, 3.0);
        let expected: BTreeSet<_> = (0..=4).flat_map(|x| [(x, 4), (x, 5)]).collect();
        assert_eq!(coords(&hits), expected);
    }

    #[test]
    fn diagonal_edge_pixels_are_partially_covered() {
        let hits = trace(0, 0, 2, 2, 1.0);
        let expected: BTreeSet<_> = [(0, 0), (0, 1), (1, 0), (1, 1), (1, 2), (2, 1), (2, 2)]
            .into_iter()
            .collect();
        assert_eq!(coords(&hits), expected);

        for &(x, y, i) in &hits {
            if x == y {
                assert_eq!(i, 1.0);
            } else {
                assert_relative_eq!(i, 1.0 - std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn swapping_endpoints_covers_the_same_pixels() {
        for (x0, y0, x1, y1, width) in [
            (5, 0, 5, 9, 3.0),
            (5, 0, 5, 9, 6.0),
            (0, 5, 9, 5, 4.0),
            (0, 0, 6, 6, 1.0),
            (2, 8, 8, 2, 1.0),
        ] {
            let forward = coords(&trace(x0, y0, x1, y1, width));
            let backward = coords(&trace(x1, y1, x0, y0, width));
            assert_eq!(forward, backward, "({x0}, {y0}) -> ({x1}, {y1}) width {width}");
        }
    }

    #[test]
    fn sub_pixel_width_is_still_visible() {
        let hits = trace(0, 0, 6, 0, 0.0);
        assert_eq!(coords(&hits).len(), 7);
        for &(_, _, i) in &hits {
            assert!(i > 0.0 && i < 1.0);
            assert_relative_eq!(i, 0.5);
        }
    }

    #[test]
    fn sub_pixel_width_never_reports_negative_coverage() {
        for width in [0.0, 0.5] {
            for (x1, y1) in [(7, 1), (1, 7), (-7, 2), (5, -3), (9, 4), (-6, -6)] {
                for &(x, y, i) in &trace(0, 0, x1, y1, width) {
                    assert!(
                        (0.0..=1.0).contains(&i),
                        "({x}, {y}) on (0, 0) -> ({x1}, {y1}) width {width}: {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn sub_pixel_width_keeps_the_main_path_lit() {
        // At width 0 the far end of a shallow line would otherwise fall
        // below zero coverage.
        let hits = trace(0, 0, 7, 1, 0.0);
        for x in 4..=6 {
            let (_, _, i) = hits
                .iter()
                .copied()
                .find(|&(hx, hy, _)| (hx, hy) == (x, 0))
                .unwrap();
            assert_eq!(i, 1.0, "pixel ({x}, 0)");
        }
    }

    #[test]
    fn intensities_are_never_nan() {
        for width in [0.0, 0.5, 1.0, 10.0] {
            for &(_, _, i) in &trace(0, 0, 0, 0, width) {
                assert!(i.is_finite());
            }
            for &(_, _, i) in &trace(-3, 7, 11, -2, width) {
                assert!(i.is_finite());
            }
        }
    }
}
