//! TexQuant - 16-bit texture color quantization
//!
//! This library reduces 32-bit RGBA textures to the 16-bit-equivalent color
//! depth used by dense on-disk texture formats: 5 bits per RGB channel, with
//! the alpha channel's high bit folded into the green channel as one extra
//! quantization step. Two strategies are available, straight truncation and
//! spatial ordered dithering; the dithered mode trades spatial resolution
//! for perceived color resolution to reduce visible banding.
//!
//! The [`quant`] module holds the pure pixel codec, [`convert`] wraps it in
//! a batch PNG conversion workflow, and [`config`] provides the user
//! configuration file.

pub mod config;
pub mod convert;
pub mod quant;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
