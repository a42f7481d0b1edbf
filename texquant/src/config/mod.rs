//! User configuration file handling.
//!
//! TexQuant reads defaults from an INI file in the platform config
//! directory (`~/.config/texquant/config.ini` on Linux). CLI arguments
//! override config file values; config file values override built-in
//! defaults.
//!
//! ```ini
//! [convert]
//! mode = dithered
//! threads = 4
//! # Omit output_dir to overwrite sources in place
//! output_dir = /tmp/quantized
//! ```

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::quant::QuantizationMode;

/// Errors that can occur loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid INI.
    #[error("Failed to parse config file: {0}")]
    Parse(String),

    /// A setting holds a value that cannot be interpreted.
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Settings for the convert command.
    pub convert: ConvertSettings,
}

/// Settings for the convert command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSettings {
    /// Default quantization mode.
    pub mode: QuantizationMode,

    /// Worker thread count (0 uses one per CPU core).
    pub threads: usize,

    /// Default output directory; `None` overwrites sources in place.
    pub output_dir: Option<PathBuf>,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            mode: QuantizationMode::Straight,
            threads: 0,
            output_dir: None,
        }
    }
}

/// Path of the configuration file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("texquant")
        .join("config.ini")
}

impl ConfigFile {
    /// Load the configuration file from its default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(io) => ConfigError::Io(io),
            ini::Error::Parse(parse) => ConfigError::Parse(parse.to_string()),
        })?;

        let mut config = ConfigFile::default();
        if let Some(section) = ini.section(Some("convert")) {
            if let Some(mode) = section.get("mode") {
                config.convert.mode =
                    mode.parse()
                        .map_err(|_| ConfigError::InvalidValue {
                            key: "mode".to_string(),
                            value: mode.to_string(),
                        })?;
            }
            if let Some(threads) = section.get("threads") {
                config.convert.threads =
                    threads
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue {
                            key: "threads".to_string(),
                            value: threads.to_string(),
                        })?;
            }
            if let Some(dir) = section.get("output_dir") {
                config.convert.output_dir = Some(PathBuf::from(dir));
            }
        }

        Ok(config)
    }

    /// Save the configuration to its default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save the configuration to a specific path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let mut ini = Ini::new();
        let mut section = ini.with_section(Some("convert"));
        section
            .set("mode", self.convert.mode.name())
            .set("threads", self.convert.threads.to_string());
        if let Some(dir) = &self.convert.output_dir {
            section.set("output_dir", dir.display().to_string());
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        ini.write_to_file(path)?;
        Ok(())
    }
}

/// Format a byte count for human display.
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;
    const GB: usize = 1024 * MB;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
