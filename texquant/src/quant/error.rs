//! Error types for the quantization core.

use thiserror::Error;

/// Errors that can occur in the whole-image quantization pipeline.
///
/// The per-pixel transform itself is total; only malformed whole-image
/// inputs are rejected, and they are rejected before any output is
/// produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuantError {
    /// The input image has no pixels to transform.
    #[error("Empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// The pixel buffer length does not match the stated dimensions.
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_image_display() {
        let err = QuantError::EmptyImage {
            width: 0,
            height: 16,
        };
        assert_eq!(err.to_string(), "Empty image: 0x16");
    }

    #[test]
    fn test_buffer_size_mismatch_display() {
        let err = QuantError::BufferSizeMismatch {
            expected: 16,
            actual: 12,
        };
        assert!(err.to_string().contains("expected 16"));
        assert!(err.to_string().contains("got 12"));
    }
}
