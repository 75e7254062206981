// Window that shows the pixel buffer while the turtle draws.
// Visual: each present() repaints the window with the canvas as it is right now.

use minifb::{Key, Window, WindowOptions as MinifbOptions};

use crate::canvas::PixelBuffer;
use crate::config::WindowOptions;
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::shapes::Present;

pub struct Display {
    window: Window,
    frame: Vec<u32>, // 0x00RRGGBB per pixel, reused every present
}

impl Display {
    /// Open a window of exactly `width`×`height` pixels.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(title, width, height, MinifbOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        tracing::debug!(title, width, height, "window opened");
        Ok(Self {
            window,
            frame: Vec::with_capacity(width * height),
        })
    }

    /// Push the canvas to the screen and pump window events.
    pub fn show(&mut self, canvas: &PixelBuffer) -> Result<()> {
        self.frame.clear();
        self.frame.extend(canvas.data().iter().map(|c| c.to_u32()));
        self.window
            .update_with_buffer(&self.frame, canvas.width(), canvas.height())
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false once the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Keep the last frame on screen until the window is closed or ESC is pressed.
    pub fn wait_for_close(&mut self) {
        while self.is_open() && !self.esc_pressed() {
            self.window.update();
        }
    }
}

impl Present<PixelBuffer> for Display {
    /// Repaint, then report whether the user still wants the drawing to continue.
    fn present(&mut self, canvas: &PixelBuffer) -> bool {
        if let Err(e) = self.show(canvas) {
            tracing::warn!(error = %e, "window update failed, stopping");
            return false;
        }
        self.is_open() && !self.esc_pressed()
    }
}

/// Open a window, hand a cursor at (0,0) and the display to `draw`, then keep the
/// finished picture up until the window is closed.
pub fn run_window<F>(opts: &WindowOptions, draw: F) -> Result<()>
where
    F: FnOnce(&mut Cursor<'_>, &mut Display),
{
    let mut display = Display::new(&opts.title, opts.width, opts.height)?;
    let mut canvas = PixelBuffer::new(opts.width, opts.height, opts.background)?;

    {
        let mut cursor = Cursor::new(&mut canvas, 0.0, 0.0);
        cursor.set_delay(opts.delay);
        draw(&mut cursor, &mut display);
    }

    if display.is_open() {
        display.show(&canvas)?;
        display.wait_for_close();
    }
    Ok(())
}
