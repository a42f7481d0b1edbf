//! Batch conversion of PNG texture assets.
//!
//! This module wraps the quantization core in a file workflow: resolve the
//! user's input paths to a list of PNG assets, decode each one to RGBA8,
//! run the pixel transform, and re-encode the result, either overwriting
//! the source in place or writing into a separate output directory.
//!
//! Images in a batch are independent of each other, so files are processed
//! in parallel. Per-file failures are collected into the batch summary
//! rather than aborting the run.

mod batch;
mod discovery;
mod error;

pub use batch::{BatchConverter, BatchSummary};
pub use discovery::find_png_assets;
pub use error::ConvertError;
