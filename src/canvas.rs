// The RGB pixel grid the turtle draws into.
// Out-of-range access is never an error: writes are dropped and reads return a
// sentinel, so the rasterizer can run off the edge without bounds branches.

use crate::error::{Error, Result};
use crate::types::Color;

/// A fixed-size grid of pixels addressed with signed coordinates.
pub trait Surface {
    type Pixel: Copy;

    /// Returned by `get` for coordinates outside the grid.
    const OUT_OF_RANGE: Self::Pixel;
    /// Pen a fresh cursor starts with.
    const DEFAULT_PEN: Self::Pixel;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn set(&mut self, x: i32, y: i32, pixel: Self::Pixel);
    fn get(&self, x: i32, y: i32) -> Self::Pixel;
}

/// Row-major index for (x,y), or None when outside a `width`×`height` grid.
#[inline]
pub(crate) fn index_of(width: usize, height: usize, x: i32, y: i32) -> Option<usize> {
    if x < 0 || y < 0 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= width || y >= height {
        return None;
    }
    Some(y * width + x)
}

/// Width×height RGB pixels, origin top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Allocate a buffer filled with `background`. Both sides must be at least 1.
    pub fn new(width: usize, height: usize, background: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height, min: 1 });
        }
        tracing::debug!(width, height, ?background, "pixel buffer created");
        Ok(Self {
            width,
            height,
            pixels: vec![background; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Overwrite every pixel.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = index_of(self.width, self.height, x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Black outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Color {
        match index_of(self.width, self.height, x, y) {
            Some(idx) => self.pixels[idx],
            None => Color::BLACK,
        }
    }

    /// All pixels, row-major, top row first.
    pub fn data(&self) -> &[Color] {
        &self.pixels
    }

    /// One row of pixels; `y` must be below `height()`.
    pub(crate) fn row(&self, y: usize) -> &[Color] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }
}

impl Surface for PixelBuffer {
    type Pixel = Color;

    const OUT_OF_RANGE: Color = Color::BLACK;
    const DEFAULT_PEN: Color = Color::BLACK;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set(&mut self, x: i32, y: i32, pixel: Color) {
        PixelBuffer::set(self, x, y, pixel);
    }

    fn get(&self, x: i32, y: i32) -> Color {
        PixelBuffer::get(self, x, y)
    }
}
