//! Error types for asset conversion.

use std::path::PathBuf;

use thiserror::Error;

use crate::quant::QuantError;

/// Errors that can occur while discovering or converting PNG assets.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An input path does not exist.
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// I/O error reading or writing an asset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode an image file.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// Failed to encode the converted image.
    #[error("Failed to encode image: {0}")]
    Encode(String),

    /// The quantization core rejected the image.
    #[error(transparent)]
    Quant(#[from] QuantError),

    /// Failed to build the worker thread pool.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_display() {
        let err = ConvertError::PathNotFound(PathBuf::from("/missing/tex.png"));
        assert!(err.to_string().contains("/missing/tex.png"));
    }

    #[test]
    fn test_quant_error_passthrough() {
        let err: ConvertError = QuantError::EmptyImage {
            width: 0,
            height: 0,
        }
        .into();
        assert!(matches!(err, ConvertError::Quant(_)));
        assert_eq!(err.to_string(), "Empty image: 0x0");
    }
}
