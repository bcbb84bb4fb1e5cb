//! Vector drawing on color images.
//!
//! All primitives clip per pixel: coordinates outside the image are skipped,
//! never an error. Colors are clamped to the image's max value.

use alloc::vec::Vec;

use imgref::ImgVec;
use rgb::Rgb;

use crate::error::PnmError;
use crate::image::{Image, Pixels};
use crate::pixel::Variant;

const COS_60: f64 = 0.5;
const SIN_60: f64 = 0.866_025_403_784_438_6;

/// Deepest Koch recursion drawn; larger depths are drawn at this depth.
/// Each curve then has at most `4^10` segments.
pub const KOCH_MAX_DEPTH: u32 = 10;

/// Integer lattice point. May lie outside the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Drawing surface borrowed from a color [`Image`].
pub struct Canvas<'a> {
    img: &'a mut ImgVec<Rgb<u16>>,
    max_value: u16,
}

impl Image {
    /// Borrow this image for drawing. Only color images can be drawn on.
    pub fn canvas(&mut self) -> Result<Canvas<'_>, PnmError> {
        let max_value = self.max_value;
        match &mut self.pixels {
            Pixels::Color(img) => Ok(Canvas { img, max_value }),
            other => Err(PnmError::VariantMismatch {
                expected: Variant::Color,
                actual: other.variant(),
            }),
        }
    }
}

fn round(v: f64) -> i64 {
    if v >= 0.0 {
        (v + 0.5) as i64
    } else {
        (v - 0.5) as i64
    }
}

fn ceil(v: f64) -> i64 {
    let t = v as i64;
    if (t as f64) < v { t + 1 } else { t }
}

fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

/// Steps `t` for which `start + step * t` falls in `0..len`, as an
/// inclusive range. `step` is `1` or `-1`.
fn visible(start: i64, step: i64, len: i64) -> (i64, i64) {
    if step > 0 {
        (-start, len - 1 - start)
    } else {
        (start - len + 1, start)
    }
}

/// Minor-axis offset of Bresenham step `i` for a line spanning `major`
/// by `minor` pixels. Same result as the incremental error term.
fn minor_offset(i: i64, major: i64, minor: i64) -> i64 {
    if major == 0 {
        return 0;
    }
    let (i, major, minor) = (i128::from(i), i128::from(major), i128::from(minor));
    ((2 * i * minor + major - 1) / (2 * major)) as i64
}

/// First step in `lo..hi` whose minor offset reaches `t`, or `hi`.
fn first_step(mut lo: i64, mut hi: i64, t: i64, major: i64, minor: i64) -> i64 {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if minor_offset(mid, major, minor) >= t {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// `x` of the midpoint circle of radius `r` when the walk visits row `y`,
/// or `-1` once the walk has ended. Closed form of the error term:
/// the largest `x` with `x * (x - 1) < r^2 - y^2`.
fn octant_x(r: i64, y: i64) -> i64 {
    if y == 0 {
        return r;
    }
    let t = r * r - y * y;
    if t <= 0 {
        return -1;
    }
    let s = (t as u64).isqrt() as i64;
    if s * (s + 1) < t { s + 1 } else { s }
}

/// Largest `y` in `0..=hi` for which `holds` is true. `holds` must be true
/// at `0` and stay false once it turns false.
fn last_holding(hi: i64, holds: impl Fn(i64) -> bool) -> i64 {
    let (mut lo, mut hi) = (0, hi + 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if holds(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo - 1
}

impl Canvas<'_> {
    fn dimensions(&self) -> (i64, i64) {
        (self.img.width() as i64, self.img.height() as i64)
    }

    fn clamp(&self, color: Rgb<u16>) -> Rgb<u16> {
        let max = self.max_value;
        Rgb::new(color.r.min(max), color.g.min(max), color.b.min(max))
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgb<u16>) {
        let (width, height) = self.dimensions();
        if (0..width).contains(&x) && (0..height).contains(&y) {
            self.img.buf_mut()[(y * width + x) as usize] = color;
        }
    }

    /// Fill pixels `start..end` of row `y`, clipped to the image.
    fn span(&mut self, y: i64, start: i64, end: i64, color: Rgb<u16>) {
        let (width, height) = self.dimensions();
        if !(0..height).contains(&y) {
            return;
        }
        let (start, end) = (start.max(0), end.min(width));
        if start >= end {
            return;
        }
        let row = (y * width) as usize;
        self.img.buf_mut()[row + start as usize..row + end as usize].fill(color);
    }

    /// Set one pixel; out-of-range points are ignored.
    pub fn set_pixel(&mut self, p: Point, color: Rgb<u16>) {
        let color = self.clamp(color);
        self.plot(i64::from(p.x), i64::from(p.y), color);
    }

    /// Bresenham line, both endpoints inclusive, 8-connected.
    pub fn draw_line(&mut self, p1: Point, p2: Point, color: Rgb<u16>) {
        let color = self.clamp(color);
        self.line(p1, p2, color);
    }

    fn line(&mut self, p1: Point, p2: Point, color: Rgb<u16>) {
        let a = (i64::from(p1.x), i64::from(p1.y));
        let b = (i64::from(p2.x), i64::from(p2.y));
        self.segment(a, b, color);
    }

    /// Walks only the steps that land inside the image, so the cost is
    /// bounded by the image size rather than the endpoint distance.
    fn segment(&mut self, (x1, y1): (i64, i64), (x2, y2): (i64, i64), color: Rgb<u16>) {
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x2 < x1 { -1 } else { 1 };
        let sy = if y2 < y1 { -1 } else { 1 };
        let (width, height) = self.dimensions();

        let x_major = dx >= dy;
        let (major, minor) = (dx.max(dy), dx.min(dy));
        let (m0, m_step, m_len, n0, n_step, n_len) = if x_major {
            (x1, sx, width, y1, sy, height)
        } else {
            (y1, sy, height, x1, sx, width)
        };

        let (lo, hi) = visible(m0, m_step, m_len);
        let (lo, hi) = (lo.max(0), hi.min(major));
        let (t_lo, t_hi) = visible(n0, n_step, n_len);
        let (t_lo, t_hi) = (t_lo.max(0), t_hi.min(minor));
        if lo > hi || t_lo > t_hi {
            return;
        }
        // minor offset never decreases along the walk
        let start = first_step(lo, hi + 1, t_lo, major, minor);
        let end = first_step(start, hi + 1, t_hi + 1, major, minor);

        for i in start..end {
            let m = m0 + m_step * i;
            let n = n0 + n_step * minor_offset(i, major, minor);
            if x_major {
                self.plot(m, n, color);
            } else {
                self.plot(n, m, color);
            }
        }
    }

    /// Outline with corners `origin`, `origin + (width, 0)`,
    /// `origin + (width, height)` and `origin + (0, height)`.
    pub fn draw_rectangle(&mut self, origin: Point, width: i32, height: i32, color: Rgb<u16>) {
        let color = self.clamp(color);
        let corners = [
            origin,
            Point::new(origin.x.saturating_add(width), origin.y),
            Point::new(
                origin.x.saturating_add(width),
                origin.y.saturating_add(height),
            ),
            Point::new(origin.x, origin.y.saturating_add(height)),
        ];
        self.outline(&corners, color);
    }

    /// Fill `[origin.x, origin.x + width) x [origin.y, origin.y + height)`.
    pub fn draw_filled_rectangle(
        &mut self,
        origin: Point,
        width: i32,
        height: i32,
        color: Rgb<u16>,
    ) {
        let color = self.clamp(color);
        let (x0, y0) = (i64::from(origin.x), i64::from(origin.y));
        let y_end = (y0 + i64::from(height)).min(self.dimensions().1);
        for y in y0.max(0)..y_end {
            self.span(y, x0, x0 + i64::from(width), color);
        }
    }

    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Rgb<u16>) {
        let color = self.clamp(color);
        self.outline(&[p1, p2, p3], color);
    }

    /// Closed outline through `points`. A single point plots that pixel.
    pub fn draw_polygon(&mut self, points: &[Point], color: Rgb<u16>) {
        let color = self.clamp(color);
        self.outline(points, color);
    }

    fn outline(&mut self, points: &[Point], color: Rgb<u16>) {
        match points {
            [] => {}
            [p] => self.plot(i64::from(p.x), i64::from(p.y), color),
            [first, .., last] => {
                for pair in points.windows(2) {
                    self.line(pair[0], pair[1], color);
                }
                self.line(*last, *first, color);
            }
        }
    }

    pub fn draw_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: Rgb<u16>) {
        self.draw_filled_polygon(&[p1, p2, p3], color);
    }

    /// Even-odd scanline fill sampled at pixel centres, plus the outline.
    pub fn draw_filled_polygon(&mut self, points: &[Point], color: Rgb<u16>) {
        let color = self.clamp(color);
        if points.len() >= 3 {
            let min_y = points.iter().map(|p| i64::from(p.y)).min().unwrap_or(0);
            let max_y = points.iter().map(|p| i64::from(p.y)).max().unwrap_or(0);
            let y_end = max_y.min(self.dimensions().1 - 1);

            let mut crossings: Vec<f64> = Vec::new();
            for y in min_y.max(0)..=y_end {
                let yc = y as f64 + 0.5;
                crossings.clear();
                for (i, a) in points.iter().enumerate() {
                    let b = points[(i + 1) % points.len()];
                    let (ay, by) = (f64::from(a.y), f64::from(b.y));
                    // half-open rule: a vertex on the scanline counts once
                    if (ay <= yc) != (by <= yc) {
                        let t = (yc - ay) / (by - ay);
                        crossings.push(f64::from(a.x) + t * (f64::from(b.x) - f64::from(a.x)));
                    }
                }
                crossings.sort_unstable_by(f64::total_cmp);
                for pair in crossings.chunks_exact(2) {
                    self.span(y, ceil(pair[0] - 0.5), ceil(pair[1] - 0.5), color);
                }
            }
        }
        self.outline(points, color);
    }

    /// Midpoint circle outline. Negative radii draw nothing.
    pub fn draw_circle(&mut self, center: Point, radius: i32, color: Rgb<u16>) {
        if radius < 0 {
            return;
        }
        let color = self.clamp(color);
        let r = i64::from(radius);
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let (width, height) = self.dimensions();
        let last = last_holding(r, |y| octant_x(r, y) >= y);
        // every mirrored point sits on row cy ± y or column cx ± y
        let bands = [
            visible(cy, 1, height),
            visible(cy, -1, height),
            visible(cx, 1, width),
            visible(cx, -1, width),
        ];
        for (lo, hi) in bands {
            for y in lo.max(0)..=hi.min(last) {
                let x = octant_x(r, y);
                for (dx, dy) in [
                    (x, y),
                    (y, x),
                    (-y, x),
                    (-x, y),
                    (-x, -y),
                    (-y, -x),
                    (y, -x),
                    (x, -y),
                ] {
                    self.plot(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Disc covering [`Canvas::draw_circle`]'s outline, filled one row at
    /// a time.
    pub fn draw_filled_circle(&mut self, center: Point, radius: i32, color: Rgb<u16>) {
        if radius < 0 {
            return;
        }
        let color = self.clamp(color);
        let r = i64::from(radius);
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let height = self.dimensions().1;
        let last = last_holding(r, |y| octant_x(r, y) >= y);
        for row in (cy - r).max(0)..=(cy + r).min(height - 1) {
            let d = (row - cy).abs();
            let half = if d <= last {
                octant_x(r, d)
            } else {
                last_holding(last, |y| octant_x(r, y) >= d)
            };
            self.span(row, cx - half, cx + half + 1, color);
        }
    }

    /// Koch curve of depth `n` from `p1` to `p2`; bumps point to the left
    /// of the direction of travel (up, for a left-to-right segment).
    /// Depths above [`KOCH_MAX_DEPTH`] are drawn at that depth.
    pub fn draw_koch_curve(&mut self, n: u32, p1: Point, p2: Point, color: Rgb<u16>) {
        let color = self.clamp(color);
        let n = n.min(KOCH_MAX_DEPTH);
        let a = (f64::from(p1.x), f64::from(p1.y));
        let b = (f64::from(p2.x), f64::from(p2.y));
        self.koch(n, a, b, color);
    }

    /// Koch snowflake on the triangle `start`, `start + (width, 0)` and the
    /// apex below their midpoint, bumps pointing outward. Depth is capped
    /// like [`Canvas::draw_koch_curve`].
    pub fn draw_koch_snowflake(&mut self, n: u32, start: Point, width: i32, color: Rgb<u16>) {
        let color = self.clamp(color);
        let n = n.min(KOCH_MAX_DEPTH);
        let side = f64::from(width);
        let a = (f64::from(start.x), f64::from(start.y));
        let b = (a.0 + side, a.1);
        let c = (a.0 + side / 2.0, a.1 + side * SIN_60);
        self.koch(n, a, b, color);
        self.koch(n, b, c, color);
        self.koch(n, c, a, color);
    }

    fn koch(&mut self, n: u32, a: (f64, f64), b: (f64, f64), color: Rgb<u16>) {
        // the curve stays within |ab| * sqrt(3) / 6 of the segment
        let margin = 0.3 * (abs(b.0 - a.0) + abs(b.1 - a.1)) + 1.0;
        let (width, height) = self.dimensions();
        if a.0.max(b.0) + margin < 0.0
            || a.1.max(b.1) + margin < 0.0
            || a.0.min(b.0) - margin > width as f64
            || a.1.min(b.1) - margin > height as f64
        {
            return;
        }
        if n == 0 {
            self.segment((round(a.0), round(a.1)), (round(b.0), round(b.1)), color);
            return;
        }
        let d = ((b.0 - a.0) / 3.0, (b.1 - a.1) / 3.0);
        let p = (a.0 + d.0, a.1 + d.1);
        let q = (a.0 + 2.0 * d.0, a.1 + 2.0 * d.1);
        // d rotated by -60 degrees (y grows downward)
        let peak = (
            p.0 + d.0 * COS_60 + d.1 * SIN_60,
            p.1 - d.0 * SIN_60 + d.1 * COS_60,
        );
        self.koch(n - 1, a, p, color);
        self.koch(n - 1, p, peak, color);
        self.koch(n - 1, peak, q, color);
        self.koch(n - 1, q, b, color);
    }
}
