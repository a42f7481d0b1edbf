//! TexQuant CLI - command-line texture quantization.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::config::ConfigAction;
use commands::convert::ConvertArgs;

/// Quantize PNG textures to 16-bit color depth.
#[derive(Debug, Parser)]
#[command(name = "texquant", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Quantize PNG textures in place or into an output directory
    Convert(ConvertArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Convert(args) => commands::convert::run(args),
        Command::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber from `RUST_LOG`, defaulting to
/// warnings only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_with_flags() {
        let cli = Cli::parse_from([
            "texquant", "convert", "--mode", "dithered", "--yes", "a.png",
        ]);
        match cli.command {
            Command::Convert(args) => {
                assert!(args.yes);
                assert_eq!(args.paths.len(), 1);
            }
            _ => panic!("Expected convert command"),
        }
    }
}
