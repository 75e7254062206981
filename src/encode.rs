// Serialize a PixelBuffer to image files.
// PPM (P6) and 24-bit BMP are written byte by byte so the layout is exact and
// deterministic; PNG goes through the `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::canvas::PixelBuffer;
use crate::error::{Error, Result};

/// BITMAPFILEHEADER (14) + BITMAPINFOHEADER (40).
pub const BMP_HEADER_SIZE: u32 = 54;
const BMP_INFO_HEADER_SIZE: u32 = 40;
const BMP_PIXELS_PER_METER: u32 = 2835; // ~72 DPI

/// Bytes per BMP row: 3 per pixel, padded up to a multiple of 4.
pub fn bmp_row_stride(width: usize) -> usize {
    (width * 3 + 3) & !3
}

/// "P6\n<w> <h>\n255\n" followed by RGB triplets, top row first.
pub fn encode_ppm(buf: &PixelBuffer) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", buf.width(), buf.height());
    let mut out = Vec::with_capacity(header.len() + buf.data().len() * 3);
    out.extend_from_slice(header.as_bytes());
    for px in buf.data() {
        out.extend_from_slice(&[px.r, px.g, px.b]);
    }
    out
}

/// Header sizes of a width×height BMP: (width, height, pixel data bytes, file bytes).
/// Every field must fit the header's u32, so pixel data plus header stays under 4 GiB.
pub fn bmp_layout(width: usize, height: usize) -> Result<(u32, u32, u32, u32)> {
    let too_large = || Error::TooLarge { width, height };
    let w = u32::try_from(width).map_err(|_| too_large())?;
    let h = u32::try_from(height).map_err(|_| too_large())?;
    let stride = width.checked_mul(3).and_then(|b| b.checked_add(3)).ok_or_else(too_large)? & !3;
    let data = stride
        .checked_mul(height)
        .and_then(|d| u32::try_from(d).ok())
        .ok_or_else(too_large)?;
    let file = BMP_HEADER_SIZE.checked_add(data).ok_or_else(too_large)?;
    Ok((w, h, data, file))
}

/// Uncompressed 24-bit BMP: bottom row first, BGR, rows zero-padded to 4 bytes.
/// Fails with `Error::TooLarge` when the sizes do not fit the header (see `bmp_layout`).
pub fn encode_bmp(buf: &PixelBuffer) -> Result<Vec<u8>> {
    let (width, height, pixel_data_size, file_size) = bmp_layout(buf.width(), buf.height())?;
    let stride = bmp_row_stride(buf.width());
    let padding = stride - buf.width() * 3;

    let mut out = Vec::with_capacity(file_size as usize);

    // BITMAPFILEHEADER
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved1
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved2
    out.extend_from_slice(&BMP_HEADER_SIZE.to_le_bytes()); // pixel data offset

    // BITMAPINFOHEADER
    out.extend_from_slice(&BMP_INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&pixel_data_size.to_le_bytes());
    out.extend_from_slice(&BMP_PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&BMP_PIXELS_PER_METER.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    for y in (0..buf.height()).rev() {
        for px in buf.row(y) {
            out.extend_from_slice(&[px.b, px.g, px.r]);
        }
        out.resize(out.len() + padding, 0);
    }
    Ok(out)
}

pub fn write_ppm<W: Write>(buf: &PixelBuffer, out: &mut W) -> Result<()> {
    out.write_all(&encode_ppm(buf))?;
    Ok(())
}

pub fn write_bmp<W: Write>(buf: &PixelBuffer, out: &mut W) -> Result<()> {
    out.write_all(&encode_bmp(buf)?)?;
    Ok(())
}

fn save_with(path: &Path, bytes: Vec<u8>) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(&bytes)?;
    out.flush()?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "image saved");
    Ok(())
}

/// Write a P6 file. `Ok` only after every byte reached the file.
pub fn save_ppm(buf: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    save_with(path.as_ref(), encode_ppm(buf))
}

/// Write a 24-bit BMP file. `Ok` only after every byte reached the file.
pub fn save_bmp(buf: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    save_with(path.as_ref(), encode_bmp(buf)?)
}

/// Copy into an `image` RGB buffer.
pub fn to_rgb_image(buf: &PixelBuffer) -> RgbImage {
    RgbImage::from_fn(buf.width() as u32, buf.height() as u32, |x, y| {
        let c = buf.get(x as i32, y as i32);
        Rgb([c.r, c.g, c.b])
    })
}

pub fn save_png(buf: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    to_rgb_image(buf).save_with_format(path, ImageFormat::Png)?;
    tracing::debug!(path = %path.display(), "image saved");
    Ok(())
}
