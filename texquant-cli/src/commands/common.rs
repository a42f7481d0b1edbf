//! Shared helpers for CLI commands.

use clap::ValueEnum;
use texquant::config::ConfigFile;
use texquant::quant::QuantizationMode;

/// Quantization mode CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Truncate channels to the nearest lower level
    Straight,
    /// Spatially dither between adjacent levels
    Dithered,
}

impl From<ModeArg> for QuantizationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Straight => QuantizationMode::Straight,
            ModeArg::Dithered => QuantizationMode::Dithered,
        }
    }
}

/// Resolve the quantization mode: CLI argument over config file default.
pub fn resolve_mode(cli: Option<ModeArg>, config: &ConfigFile) -> QuantizationMode {
    match cli {
        Some(arg) => arg.into(),
        None => config.convert.mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_argument_wins() {
        let mut config = ConfigFile::default();
        config.convert.mode = QuantizationMode::Straight;
        assert_eq!(
            resolve_mode(Some(ModeArg::Dithered), &config),
            QuantizationMode::Dithered
        );
    }

    #[test]
    fn test_config_default_when_no_argument() {
        let mut config = ConfigFile::default();
        config.convert.mode = QuantizationMode::Dithered;
        assert_eq!(resolve_mode(None, &config), QuantizationMode::Dithered);
    }
}
