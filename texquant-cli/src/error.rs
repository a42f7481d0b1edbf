//! CLI error types.

use std::fmt;

use texquant::convert::ConvertError;

/// Errors reported by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Asset discovery failed.
    Discovery(ConvertError),

    /// The batch conversion could not run.
    Convert(ConvertError),

    /// Some files in the batch failed to convert.
    PartialFailure { failed: usize },

    /// Configuration error.
    Config(String),

    /// Interactive prompt failed.
    Prompt(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Discovery(e) => {
                write!(f, "Failed to discover input files: {}", e)
            }
            CliError::Convert(e) => {
                write!(f, "Conversion failed: {}", e)
            }
            CliError::PartialFailure { failed } => {
                write!(f, "{} file(s) failed to convert", failed)
            }
            CliError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            CliError::Prompt(msg) => {
                write!(f, "Prompt error: {}", msg)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Discovery(e) => Some(e),
            CliError::Convert(e) => Some(e),
            CliError::PartialFailure { .. } => None,
            CliError::Config(_) => None,
            CliError::Prompt(_) => None,
        }
    }
}
