//! Parallel batch conversion of PNG files.

use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::quant::{quantize_image, QuantizationMode};

use super::error::ConvertError;

/// Converts batches of PNG files to quantized color depth.
///
/// Each file is decoded to RGBA8, run through the quantization pipeline,
/// and re-encoded as PNG. By default sources are overwritten in place;
/// [`with_output_dir`](BatchConverter::with_output_dir) redirects the
/// output instead. Files are converted in parallel since each image is
/// independent of the others.
///
/// # Example
///
/// ```no_run
/// use texquant::convert::BatchConverter;
/// use texquant::quant::QuantizationMode;
///
/// let converter = BatchConverter::new(QuantizationMode::Dithered)
///     .with_output_dir("out")
///     .with_threads(4);
/// let summary = converter.run(&["textures/ui.png".into()]).unwrap();
/// println!("{} converted, {} failed", summary.converted, summary.failed);
/// ```
#[derive(Debug, Clone)]
pub struct BatchConverter {
    mode: QuantizationMode,
    output_dir: Option<PathBuf>,
    threads: usize,
}

/// Outcome of a batch conversion run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of files converted successfully.
    pub converted: usize,
    /// Number of files that failed.
    pub failed: usize,
    /// Total bytes written to converted files.
    pub bytes_written: u64,
    /// Per-file failures, in input order.
    pub failures: Vec<(PathBuf, ConvertError)>,
}

impl BatchConverter {
    /// Create a converter for the given quantization mode.
    ///
    /// By default files are overwritten in place and the global rayon pool
    /// decides parallelism.
    pub fn new(mode: QuantizationMode) -> Self {
        Self {
            mode,
            output_dir: None,
            threads: 0,
        }
    }

    /// Write converted files into `dir` instead of overwriting the sources.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Cap the number of worker threads (0 uses one per CPU core).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Get the quantization mode.
    pub fn mode(&self) -> QuantizationMode {
        self.mode
    }

    /// Convert all files, collecting per-file failures into the summary.
    ///
    /// # Errors
    ///
    /// Returns an error only when the run itself cannot proceed (output
    /// directory creation or thread pool construction failed). Individual
    /// file failures are reported through [`BatchSummary::failures`].
    pub fn run(&self, files: &[PathBuf]) -> Result<BatchSummary, ConvertError> {
        self.run_with(files, |_| {})
    }

    /// Convert all files, invoking `on_done` as each file completes.
    ///
    /// The callback runs on worker threads and is used for progress
    /// reporting.
    pub fn run_with<F>(&self, files: &[PathBuf], on_done: F) -> Result<BatchSummary, ConvertError>
    where
        F: Fn(&Path) + Sync,
    {
        if let Some(dir) = &self.output_dir {
            fs::create_dir_all(dir)?;
        }

        debug!(
            files = files.len(),
            mode = self.mode.name(),
            "Starting batch conversion"
        );

        let convert_all = || {
            files
                .par_iter()
                .map(|path| {
                    let result = self.convert_file(path);
                    on_done(path);
                    (path, result)
                })
                .collect::<Vec<_>>()
        };

        let results = if self.threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.threads)
                .build()
                .map_err(|e| ConvertError::ThreadPool(e.to_string()))?;
            pool.install(convert_all)
        } else {
            convert_all()
        };

        let mut summary = BatchSummary::default();
        for (path, result) in results {
            match result {
                Ok(bytes) => {
                    summary.converted += 1;
                    summary.bytes_written += bytes;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Conversion failed");
                    summary.failed += 1;
                    summary.failures.push((path.clone(), e));
                }
            }
        }

        Ok(summary)
    }

    /// Convert a single PNG file, returning the bytes written.
    fn convert_file(&self, path: &Path) -> Result<u64, ConvertError> {
        let source: RgbaImage = image::open(path)
            .map_err(|e| ConvertError::Decode(e.to_string()))?
            .to_rgba8();

        let converted = quantize_image(&source, self.mode)?;

        let target = self.target_path(path);
        converted
            .save(&target)
            .map_err(|e| ConvertError::Encode(e.to_string()))?;

        let bytes = fs::metadata(&target)?.len();
        debug!(
            path = %target.display(),
            mode = self.mode.name(),
            bytes,
            "Converted texture"
        );
        Ok(bytes)
    }

    /// Destination path for a converted file.
    fn target_path(&self, source: &Path) -> PathBuf {
        match (&self.output_dir, source.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => source.to_path_buf(),
        }
    }
}
