// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A canvas was requested with a size below its minimum.
    #[error("Invalid canvas size {width}x{height} (each side must be at least {min})")]
    InvalidDimensions { width: usize, height: usize, min: usize },

    /// The buffer is too large for the 32-bit size fields of a BMP header.
    #[error("Image {width}x{height} is too large for a BMP file (pixel data must stay under 4 GiB)")]
    TooLarge { width: usize, height: usize },

    /// Opening or writing an output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The `image` crate refused to encode the buffer.
    #[error("Image encode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Window init error: {0}")]
    WindowInit(String),

    #[error("Window update error: {0}")]
    WindowUpdate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
