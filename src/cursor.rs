// The turtle: a continuous position and heading that rasterizes its path into a surface.
//
// Heading 0° points along +x and grows counter-clockwise, while screen y grows
// downward, so every vertical projection subtracts sin(heading).

use std::time::Duration;

use crate::canvas::{PixelBuffer, Surface};
use crate::raster::{draw_line, fill_disc};

/// Bring any angle into [0, 360). Non-finite angles map to 0.
pub fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let d = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if d >= 360.0 { 0.0 } else { d }
}

/// Segments are shortened to this many pixels before rounding so both endpoints fit in i32.
const MAX_SEGMENT: f64 = 1.0e9;

#[inline]
fn to_pixel(v: f64) -> i32 {
    v.round() as i32
}

/// Borrows its surface mutably for its whole lifetime; position never leaves
/// [0, width-1]×[0, height-1].
pub struct Cursor<'a, S: Surface = PixelBuffer> {
    surface: &'a mut S,
    x: f64,
    y: f64,
    heading: f64,
    pen_down: bool,
    pen: S::Pixel,
    delay: Duration,
}

impl<'a, S: Surface> Cursor<'a, S> {
    /// Heading 0, pen down, default pen. The start position is clamped onto the surface.
    pub fn new(surface: &'a mut S, x: f64, y: f64) -> Self {
        let mut cursor = Self {
            surface,
            x,
            y,
            heading: 0.0,
            pen_down: true,
            pen: S::DEFAULT_PEN,
            delay: Duration::ZERO,
        };
        cursor.clamp_to_surface();
        cursor
    }

    /// Move `distance` along the heading, drawing when the pen is down.
    /// Visual: a straight stroke grows out of the turtle in the direction it faces;
    /// negative distances back up. Zero, NaN and infinite distances do nothing.
    pub fn forward(&mut self, distance: f64) {
        if distance == 0.0 || !distance.is_finite() {
            return;
        }
        let rad = self.heading.to_radians();
        let nx = self.x + distance * rad.cos();
        let ny = self.y - distance * rad.sin();
        if self.pen_down {
            self.segment(nx, ny);
        }
        self.x = nx;
        self.y = ny;
        self.clamp_to_surface();
        self.pace();
    }

    /// Jump to an absolute position; `draw` requests a line (still subject to the pen).
    /// A non-finite target leaves the cursor where it is.
    pub fn move_to(&mut self, x: f64, y: f64, draw: bool) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        if draw && self.pen_down {
            self.segment(x, y);
        }
        self.x = x;
        self.y = y;
        self.clamp_to_surface();
        self.pace();
    }

    /// Counter-clockwise on screen. Visual: nothing is drawn, the next stroke just points elsewhere.
    pub fn turn_left(&mut self, degrees: f64) {
        if !degrees.is_finite() {
            return;
        }
        self.heading = normalize_degrees(self.heading + degrees);
    }

    pub fn turn_right(&mut self, degrees: f64) {
        if !degrees.is_finite() {
            return;
        }
        self.heading = normalize_degrees(self.heading - degrees);
    }

    pub fn set_heading(&mut self, degrees: f64) {
        self.heading = normalize_degrees(degrees);
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Visual: the turtle keeps moving but leaves no trail until `pen_down`.
    pub fn pen_up(&mut self) {
        self.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.pen_down = true;
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    /// Color (or character) for future strokes; existing pixels are untouched.
    pub fn set_pen(&mut self, pen: S::Pixel) {
        self.pen = pen;
    }

    pub fn pen(&self) -> S::Pixel {
        self.pen
    }

    /// Filled disc at the rounded position. Draws even while the pen is up.
    /// Visual: a round dot marks where the turtle stands (its "head").
    pub fn stamp(&mut self, radius: i32, pixel: S::Pixel) {
        let (cx, cy) = (to_pixel(self.x), to_pixel(self.y));
        tracing::trace!(cx, cy, radius, "stamp");
        fill_disc(&mut *self.surface, cx, cy, radius, pixel);
    }

    /// Pause after every move so an attached window can show the animation.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// The surface being drawn on, e.g. to present it between steps.
    pub fn surface(&self) -> &S {
        &*self.surface
    }

    // Endpoints are rounded independently from the continuous state, so error
    // never accumulates across segments. The start is always on the surface; a far
    // target is pulled in along the same direction, which keeps the visible part.
    fn segment(&mut self, mut nx: f64, mut ny: f64) {
        let reach = (nx - self.x).abs().max((ny - self.y).abs());
        if reach > MAX_SEGMENT {
            let f = MAX_SEGMENT / reach;
            nx = self.x + (nx - self.x) * f;
            ny = self.y + (ny - self.y) * f;
        }
        let (x0, y0) = (to_pixel(self.x), to_pixel(self.y));
        let (x1, y1) = (to_pixel(nx), to_pixel(ny));
        tracing::trace!(x0, y0, x1, y1, "segment");
        draw_line(&mut *self.surface, x0, y0, x1, y1, self.pen);
    }

    fn clamp_to_surface(&mut self) {
        let max_x = self.surface.width().saturating_sub(1) as f64;
        let max_y = self.surface.height().saturating_sub(1) as f64;
        // clamp keeps NaN
        if self.x.is_nan() {
            self.x = 0.0;
        }
        if self.y.is_nan() {
            self.y = 0.0;
        }
        self.x = self.x.clamp(0.0, max_x);
        self.y = self.y.clamp(0.0, max_y);
    }

    fn pace(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}
