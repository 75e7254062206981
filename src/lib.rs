//! Turtle graphics into an RGB pixel buffer.
//!
//! A [`Cursor`] moves over a [`PixelBuffer`] with relative commands, rasterizing
//! its path with Bresenham lines. The buffer can be saved as PPM, BMP or PNG, or
//! shown in a window after every drawing step.

pub mod canvas;
pub mod config;
pub mod cursor;
pub mod encode;
pub mod error;
pub mod raster;
pub mod shapes;
pub mod text;
pub mod types;
#[cfg(feature = "window")]
pub mod window;

pub use canvas::{PixelBuffer, Surface};
pub use config::WindowOptions;
pub use cursor::Cursor;
pub use encode::{encode_bmp, encode_ppm, save_bmp, save_png, save_ppm, to_rgb_image, write_bmp, write_ppm};
pub use error::{Error, Result};
pub use shapes::{DEFAULT_SPIRAL_TURN, Present, move_with_pen, polygon, spiral};
pub use text::TextCanvas;
pub use types::{Color, rgb};
