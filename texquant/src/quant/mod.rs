//! Pixel color quantization to 16-bit-equivalent depth.
//!
//! This module is the codec core: a pure, synchronous transform that maps a
//! 32-bit RGBA pixel buffer to the color depth of a 5-bit-per-channel
//! texture format. Every output channel lands on one of the 32 levels
//! representable in 5 bits (multiples of 8), except that green may carry an
//! extra half step contributed by the alpha channel's high bit. Output
//! alpha is always fully opaque; the destination format has no alpha
//! channel, so the alpha information is spent entirely on the green boost.
//!
//! # Architecture
//!
//! ```text
//! quantize_image / quantize_rgba          (pipeline.rs)
//!        │
//!        ├── Straight ──► quantize_pixel  (channel.rs: truncate + boost)
//!        │
//!        └── Dithered ──► dither_pixel    (dither.rs: threshold pattern)
//! ```
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use texquant::quant::{quantize_image, QuantizationMode};
//!
//! let src = RgbaImage::from_pixel(2, 2, Rgba([135, 135, 135, 255]));
//! let out = quantize_image(&src, QuantizationMode::Dithered).unwrap();
//!
//! // At (0, 0) the fractional remainder 7 exceeds the red and blue
//! // thresholds but ties the green one, so green rounds down and then
//! // gains the alpha boost.
//! assert_eq!(out.get_pixel(0, 0).0, [136, 132, 136, 255]);
//! ```

mod channel;
mod dither;
mod error;
mod pipeline;

pub use channel::{alpha_boost, quantize_channel, quantize_pixel, ALPHA_BOOST, MAX_LEVEL};
pub use dither::{dither_channel, dither_pixel, DitherLevels};
pub use error::QuantError;
pub use pipeline::{quantize_image, quantize_rgba, QuantizationMode};
