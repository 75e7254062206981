// Monochrome variant of the canvas: one character per cell, printable to a terminal.

use std::io::{self, Write};

use crate::canvas::{Surface, index_of};
use crate::error::{Error, Result};

pub struct TextCanvas {
    width: usize,
    height: usize,
    blank: char,
    cells: Vec<char>,
}

impl TextCanvas {
    /// Both sides must be at least 2.
    pub fn new(width: usize, height: usize, blank: char) -> Result<Self> {
        if width < 2 || height < 2 {
            return Err(Error::InvalidDimensions { width, height, min: 2 });
        }
        Ok(Self {
            width,
            height,
            blank,
            cells: vec![blank; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every cell to the blank character.
    pub fn clear(&mut self) {
        self.cells.fill(self.blank);
    }

    pub fn set(&mut self, x: i32, y: i32, pen: char) {
        if let Some(idx) = index_of(self.width, self.height, x, y) {
            self.cells[idx] = pen;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> char {
        index_of(self.width, self.height, x, y).map_or(Self::OUT_OF_RANGE, |idx| self.cells[idx])
    }

    /// Write the grid, one line per row.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().collect();
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl Surface for TextCanvas {
    type Pixel = char;

    const OUT_OF_RANGE: char = ' ';
    const DEFAULT_PEN: char = '*';

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn set(&mut self, x: i32, y: i32, pixel: char) {
        TextCanvas::set(self, x, y, pixel);
    }

    fn get(&self, x: i32, y: i32) -> char {
        TextCanvas::get(self, x, y)
    }
}
