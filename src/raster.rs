// Integer rasterization shared by every surface.
// Endpoints may lie anywhere in i32 space; only the part of a shape that can
// land on the surface is visited, so huge segments and discs stay cheap.

use std::ops::RangeInclusive;

use crate::canvas::Surface;

/// Steps k in 0..=len for which `start + step * k` stays inside 0..extent.
fn on_surface(start: i64, step: i64, len: i64, extent: usize) -> RangeInclusive<i64> {
    let last = extent as i64 - 1;
    let (lo, hi) = if step > 0 {
        ((-start).max(0), (last - start).min(len))
    } else {
        ((start - last).max(0), start.min(len))
    };
    lo..=hi
}

#[inline]
fn plot<S: Surface + ?Sized>(surface: &mut S, x: i64, y: i64, pixel: S::Pixel) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        surface.set(x, y, pixel);
    }
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
/// Visual: a straight 1-pixel line, both endpoints included.
///
/// The pixels are exactly those of the classic error-term walk. For a line whose
/// major axis has length `a` and minor axis `b`, the walk's k-th major step lands
/// on minor offset floor((2bk + a) / 2a), so steps off the surface are skipped
/// instead of walked. Endpoints are taken in a canonical order so A→B and B→A
/// light the same pixels.
pub fn draw_line<S: Surface + ?Sized>(surface: &mut S, x0: i32, y0: i32, x1: i32, y1: i32, pixel: S::Pixel) {
    let ((x0, y0), (x1, y1)) = if (x1, y1) < (x0, y0) {
        ((x1, y1), (x0, y0))
    } else {
        ((x0, y0), (x1, y1))
    };
    let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    if dx >= dy {
        if dx == 0 {
            plot(surface, x0, y0, pixel);
            return;
        }
        for k in on_surface(x0, sx, dx, surface.width()) {
            let j = minor_offset(k, dx, dy);
            plot(surface, x0 + sx * k, y0 + sy * j, pixel);
        }
    } else {
        for k in on_surface(y0, sy, dy, surface.height()) {
            let i = minor_offset(k, dy, dx);
            plot(surface, x0 + sx * i, y0 + sy * k, pixel);
        }
    }
}

/// floor((2·minor·k + major) / (2·major)); products can exceed i64 for far endpoints.
#[inline]
fn minor_offset(k: i64, major: i64, minor: i64) -> i64 {
    let num = 2 * i128::from(minor) * i128::from(k) + i128::from(major);
    (num / (2 * i128::from(major))) as i64
}

/// Fill every pixel with dx²+dy² ≤ radius² around (cx,cy). Nothing for radius ≤ 0.
/// Visual: a solid round dot; only the rows and columns on the surface are scanned.
pub fn fill_disc<S: Surface + ?Sized>(surface: &mut S, cx: i32, cy: i32, radius: i32, pixel: S::Pixel) {
    if radius <= 0 {
        return;
    }
    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let r2 = r * r;
    let (w, h) = (surface.width() as i64, surface.height() as i64);
    for dy in (-r).max(-cy)..=r.min(h - 1 - cy) {
        for dx in (-r).max(-cx)..=r.min(w - 1 - cx) {
            if dx * dx + dy * dy <= r2 {
                plot(surface, cx + dx, cy + dy, pixel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PixelBuffer;
    use crate::types::Color;
    use std::collections::BTreeSet;

    const INK: Color = Color::new(10, 20, 30);

    fn lit(buf: &PixelBuffer) -> BTreeSet<(i32, i32)> {
        let mut out = BTreeSet::new();
        for y in 0..buf.height() as i32 {
            for x in 0..buf.width() as i32 {
                if buf.get(x, y) == INK {
                    out.insert((x, y));
                }
            }
        }
        out
    }

    fn line_pixels(x0: i32, y0: i32, x1: i32, y1: i32) -> BTreeSet<(i32, i32)> {
        let mut buf = PixelBuffer::new(32, 32, Color::WHITE).unwrap();
        draw_line(&mut buf, x0, y0, x1, y1, INK);
        lit(&buf)
    }

    #[test]
    fn horizontal_line_includes_both_endpoints() {
        let px = line_pixels(2, 5, 9, 5);
        let expected: BTreeSet<_> = (2..=9).map(|x| (x, 5)).collect();
        assert_eq!(px, expected);
    }

    #[test]
    fn single_point_line() {
        let px = line_pixels(4, 4, 4, 4);
        assert_eq!(px.into_iter().collect::<Vec<_>>(), vec![(4, 4)]);
    }

    #[test]
    fn diagonal_line() {
        let px = line_pixels(0, 0, 5, 5);
        let expected: BTreeSet<_> = (0..=5).map(|i| (i, i)).collect();
        assert_eq!(px, expected);
    }

    #[test]
    fn all_octants_are_connected_and_reach_the_endpoint() {
        let center = (16, 16);
        let targets = [(27, 19), (19, 27), (13, 27), (5, 19), (5, 13), (13, 5), (19, 5), (27, 13)];
        for (tx, ty) in targets {
            let px = line_pixels(center.0, center.1, tx, ty);
            assert!(px.contains(&center));
            assert!(px.contains(&(tx, ty)));
            let major = (tx - center.0).abs().max((ty - center.1).abs());
            assert_eq!(px.len() as i32, major + 1, "octant toward ({tx},{ty})");
        }
    }

    #[test]
    fn direction_does_not_change_the_pixel_set() {
        for (ax, ay, bx, by) in [(0, 0, 2, 1), (3, 7, 20, 2), (1, 30, 6, 0), (25, 25, 4, 11)] {
            assert_eq!(line_pixels(ax, ay, bx, by), line_pixels(bx, by, ax, ay));
        }
    }

    #[test]
    fn off_canvas_segments_are_clipped_silently() {
        let mut buf = PixelBuffer::new(4, 4, Color::WHITE).unwrap();
        draw_line(&mut buf, -10, 1, 10, 1, INK);
        let expected: BTreeSet<_> = (0..4).map(|x| (x, 1)).collect();
        assert_eq!(lit(&buf), expected);
    }

    /// The textbook loop, kept here to pin the closed form to it.
    fn walk(x0: i32, y0: i32, x1: i32, y1: i32) -> BTreeSet<(i32, i32)> {
        let ((x0, y0), (x1, y1)) = if (x1, y1) < (x0, y0) { ((x1, y1), (x0, y0)) } else { ((x0, y0), (x1, y1)) };
        let mut out = BTreeSet::new();
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            if (0..32).contains(&x) && (0..32).contains(&y) {
                out.insert((x, y));
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        out
    }

    #[test]
    fn matches_the_error_term_walk_everywhere() {
        let points = [-40, -7, 0, 3, 10, 16, 23, 31, 45];
        for &x0 in &points {
            for &y0 in &points {
                for &(x1, y1) in &[(5, 29), (31, 0), (-3, 12), (17, 17), (40, -9), (2, 3), (16, 60)] {
                    assert_eq!(line_pixels(x0, y0, x1, y1), walk(x0, y0, x1, y1), "({x0},{y0})->({x1},{y1})");
                }
            }
        }
    }

    #[test]
    fn extreme_endpoints_neither_overflow_nor_stall() {
        let mut buf = PixelBuffer::new(16, 16, Color::WHITE).unwrap();
        draw_line(&mut buf, 5, 5, i32::MIN, 5, INK);
        draw_line(&mut buf, i32::MIN, i32::MIN, i32::MAX, i32::MAX, INK);
        draw_line(&mut buf, i32::MAX, 0, i32::MIN, 0, INK);
        draw_line(&mut buf, 3, i32::MAX, 3, i32::MIN, INK);
        let px = lit(&buf);
        for x in 0..=5 {
            assert!(px.contains(&(x, 5)));
        }
        for i in 0..16 {
            assert!(px.contains(&(i, i)), "diagonal ({i},{i})");
            assert!(px.contains(&(i, 0)));
            assert!(px.contains(&(3, i)));
        }
        assert!(!px.contains(&(6, 5)));
    }

    #[test]
    fn disc_matches_the_membership_test() {
        for r in 1..=6 {
            let mut buf = PixelBuffer::new(32, 32, Color::WHITE).unwrap();
            fill_disc(&mut buf, 16, 16, r, INK);
            let expected: BTreeSet<_> = (-r..=r)
                .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
                .filter(|(dx, dy)| dx * dx + dy * dy <= r * r)
                .map(|(dx, dy)| (16 + dx, 16 + dy))
                .collect();
            assert_eq!(lit(&buf), expected, "radius {r}");
            assert!(lit(&buf).contains(&(16, 16 - r)));
        }
    }

    #[test]
    fn huge_disc_covers_the_surface_without_overflow() {
        let mut buf = PixelBuffer::new(12, 9, Color::WHITE).unwrap();
        fill_disc(&mut buf, 5, 5, 50_000, INK);
        assert_eq!(lit(&buf).len(), 12 * 9);

        let mut buf = PixelBuffer::new(12, 9, Color::WHITE).unwrap();
        fill_disc(&mut buf, 0, 0, i32::MAX, INK);
        assert_eq!(lit(&buf).len(), 12 * 9);
    }

    #[test]
    fn disc_far_off_the_surface_draws_nothing() {
        let mut buf = PixelBuffer::new(8, 8, Color::WHITE).unwrap();
        fill_disc(&mut buf, i32::MIN, i32::MAX, 100, INK);
        fill_disc(&mut buf, 200, 4, 100, INK);
        assert!(lit(&buf).is_empty());
        fill_disc(&mut buf, -3, 4, 3, INK);
        assert_eq!(lit(&buf).into_iter().collect::<Vec<_>>(), vec![(0, 4)]);
    }

    #[test]
    fn non_positive_radius_draws_nothing() {
        let mut buf = PixelBuffer::new(8, 8, Color::WHITE).unwrap();
        fill_disc(&mut buf, 4, 4, 0, INK);
        fill_disc(&mut buf, 4, 4, -3, INK);
        assert!(lit(&buf).is_empty());
    }
}
