//! Whole-image quantization pipeline.
//!
//! Iterates a source pixel buffer in row-major order, applies the selected
//! quantization strategy per pixel, and writes the results into a freshly
//! allocated output buffer of identical dimensions. The transform is pure
//! and deterministic: each pixel's result depends only on its own value and
//! the parity of its position, so identical input always yields identical
//! output regardless of processing order.

use std::str::FromStr;

use image::{Rgba, RgbaImage};

use super::channel::quantize_pixel;
use super::dither::dither_pixel;
use super::error::QuantError;

/// Quantization strategy applied to every pixel of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantizationMode {
    /// Truncate each channel to the nearest level at or below it.
    #[default]
    Straight,
    /// Round each channel up or down per the spatial threshold pattern.
    Dithered,
}

impl QuantizationMode {
    /// Human-readable mode name.
    pub fn name(&self) -> &'static str {
        match self {
            QuantizationMode::Straight => "straight",
            QuantizationMode::Dithered => "dithered",
        }
    }
}

impl FromStr for QuantizationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "straight" => Ok(QuantizationMode::Straight),
            "dithered" | "dither" => Ok(QuantizationMode::Dithered),
            other => Err(format!("Unknown quantization mode: {}", other)),
        }
    }
}

/// Quantize a raw row-major RGBA8 buffer.
///
/// Returns a freshly allocated buffer of the same length; the input is
/// never aliased or modified. Pixel `i` is at position
/// `(i % width, i / width)`.
///
/// # Errors
///
/// Returns [`QuantError::EmptyImage`] if either dimension is zero or the
/// buffer is empty, and [`QuantError::BufferSizeMismatch`] if the buffer
/// length is not `width * height * 4`.
pub fn quantize_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    mode: QuantizationMode,
) -> Result<Vec<u8>, QuantError> {
    if width == 0 || height == 0 || data.is_empty() {
        return Err(QuantError::EmptyImage { width, height });
    }

    let expected = width as usize * height as usize * 4;
    if data.len() != expected {
        return Err(QuantError::BufferSizeMismatch {
            expected,
            actual: data.len(),
        });
    }

    let mut out = Vec::with_capacity(expected);
    for (i, px) in data.chunks_exact(4).enumerate() {
        let pixel = [px[0], px[1], px[2], px[3]];
        let quantized = match mode {
            QuantizationMode::Straight => quantize_pixel(pixel),
            QuantizationMode::Dithered => {
                let x = (i % width as usize) as u32;
                let y = (i / width as usize) as u32;
                dither_pixel(pixel, x, y)
            }
        };
        out.extend_from_slice(&quantized);
    }

    Ok(out)
}

/// Quantize an [`RgbaImage`], producing a new image of identical dimensions.
///
/// # Errors
///
/// Returns [`QuantError::EmptyImage`] if either dimension is zero.
pub fn quantize_image(
    image: &RgbaImage,
    mode: QuantizationMode,
) -> Result<RgbaImage, QuantError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(QuantError::EmptyImage { width, height });
    }

    let mut out = RgbaImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels() {
        let quantized = match mode {
            QuantizationMode::Straight => quantize_pixel(pixel.0),
            QuantizationMode::Dithered => dither_pixel(pixel.0, x, y),
        };
        out.put_pixel(x, y, Rgba(quantized));
    }

    Ok(out)
}
